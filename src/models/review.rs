// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review as delivered by the reviews service. The storefront only reads these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: f64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub images: Option<Vec<Option<String>>>,
    pub created_at: DateTime<Utc>,
    pub user: ReviewUser,
    #[serde(default)]
    pub product: Option<ReviewProduct>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewProduct {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub total: u32,
    pub average_rating: f64,
}

impl ReviewUser {
    /// "First Last" when either name part is present, the email otherwise.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

impl Review {
    /// Image URLs with the null slots dropped.
    pub fn image_urls(&self) -> Vec<&str> {
        self.images
            .iter()
            .flatten()
            .filter_map(|image| image.as_deref())
            .collect()
    }
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }
        let sum: f64 = reviews.iter().map(|review| review.rating).sum();
        Self {
            total: reviews.len() as u32,
            average_rating: sum / reviews.len() as f64,
        }
    }

    /// Five-character star bar, rounding the average to the nearest whole star.
    pub fn stars(&self) -> String {
        let filled = self.average_rating.round().clamp(0.0, 5.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: f64) -> Review {
        Review {
            id: format!("r-{rating}"),
            rating,
            title: "Solid".into(),
            body: "Does what it says.".into(),
            images: None,
            created_at: Utc::now(),
            user: ReviewUser {
                id: "u-1".into(),
                first_name: None,
                last_name: None,
                email: "shopper@example.com".into(),
            },
            product: None,
        }
    }

    #[test]
    fn summary_of_no_reviews_is_zeroed() {
        let summary = ReviewSummary::from_reviews(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.stars(), "☆☆☆☆☆");
    }

    #[test]
    fn summary_averages_ratings() {
        let summary = ReviewSummary::from_reviews(&[review(5.0), review(4.0), review(3.0)]);
        assert_eq!(summary.total, 3);
        assert!((summary.average_rating - 4.0).abs() < f64::EPSILON);
        assert_eq!(summary.stars(), "★★★★☆");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = review(5.0).user;
        assert_eq!(user.display_name(), "shopper@example.com");

        user.first_name = Some("Ada".into());
        assert_eq!(user.display_name(), "Ada");

        user.last_name = Some("Lovelace".into());
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "id": "r1",
            "rating": 4,
            "title": "Nice",
            "body": "Fits well",
            "images": ["https://cdn.example.com/a.jpg", null],
            "createdAt": "2024-05-01T12:00:00Z",
            "user": { "id": "u1", "firstName": "Grace", "email": "grace@example.com" },
            "product": { "id": "p1", "name": "Canvas Tote", "slug": "canvas-tote" }
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.user.display_name(), "Grace");
        assert_eq!(review.image_urls(), vec!["https://cdn.example.com/a.jpg"]);
        assert_eq!(review.product.unwrap().slug, "canvas-tote");
    }
}
