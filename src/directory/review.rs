use rusqlite::Connection;

use super::DirectoryError;
use crate::db::repository::review as repo;
use crate::models::{NewReview, Review};

const SCORE_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

pub fn create_review(conn: &Connection, new: &NewReview) -> Result<Review, DirectoryError> {
    if new.dentist_name.trim().is_empty() || new.description.trim().is_empty() {
        return Err(DirectoryError::Validation(
            "dentist_name and description are required".into(),
        ));
    }
    for (field, score) in [
        ("professionalism", new.professionalism),
        ("communication", new.communication),
        ("cleanliness", new.cleanliness),
    ] {
        if !SCORE_RANGE.contains(&score) {
            return Err(DirectoryError::Validation(format!(
                "{field} must be between 1 and 5"
            )));
        }
    }

    let mut review = Review {
        id: 0,
        dentist_name: new.dentist_name.clone(),
        description: new.description.clone(),
        professionalism: new.professionalism,
        communication: new.communication,
        cleanliness: new.cleanliness,
        date_of_review: new.date_of_review,
    };
    review.id = repo::insert_review(conn, &review)?;

    tracing::info!(id = review.id, "Review posted");
    Ok(review)
}

pub fn get_review(conn: &Connection, id: i64) -> Result<Review, DirectoryError> {
    repo::find_review(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("review {id} not found")))
}

/// All reviews; an empty list when none have been posted yet.
pub fn list_reviews(conn: &Connection) -> Result<Vec<Review>, DirectoryError> {
    Ok(repo::list_reviews(conn)?)
}
