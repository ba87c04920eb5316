use leptos::*;
use crate::models::review::{Review, ReviewSummary};

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    let summary = ReviewSummary::from_reviews(&reviews);

    view! {
        <div class="reviews">
            <h3>{ "Reviews" }</h3>
            <p class="reviews__summary">
                <span class="reviews__stars">{ summary.stars() }</span>
                { format!(" {:.1} average from {} reviews", summary.average_rating, summary.total) }
            </p>
            {
                if reviews.is_empty() {
                    view! { <p class="reviews__empty">{ "You haven't written any reviews yet." }</p> }.into_view()
                } else {
                    view! {
                        <ul>
                            {
                                reviews.into_iter().map(|review| {
                                    view! { <ReviewItem review=review/> }
                                }).collect::<Vec<_>>()
                            }
                        </ul>
                    }.into_view()
                }
            }
        </div>
    }
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    let author = review.user.display_name();
    let written = review.created_at.format("%B %-d, %Y").to_string();
    let product = review.product.as_ref().map(|product| {
        let href = format!("/products/{}", product.slug);
        let name = product.name.clone();
        view! { <a class="review__product" href=href>{ name }</a> }
    });
    let images = review
        .image_urls()
        .into_iter()
        .map(|src| {
            let src = src.to_string();
            view! { <img class="review__image" src=src alt="" loading="lazy"/> }
        })
        .collect::<Vec<_>>();

    view! {
        <li class="review">
            { product }
            <h4>{ review.title }</h4>
            <p class="review__rating">{ format!("{}/5", review.rating) }</p>
            <p>{ review.body }</p>
            { images }
            <p class="review__meta">{ format!("{} · {}", author, written) }</p>
        </li>
    }
}
