pub mod product;
pub mod review;
pub mod test_record;
