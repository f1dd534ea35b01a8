use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::Review;

pub fn insert_review(conn: &Connection, review: &Review) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO reviews (dentist_name, description, professionalism, communication,
         cleanliness, date_of_review)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            review.dentist_name,
            review.description,
            review.professionalism,
            review.communication,
            review.cleanliness,
            review.date_of_review.to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_review(conn: &Connection, id: i64) -> Result<Option<Review>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, dentist_name, description, professionalism, communication,
             cleanliness, date_of_review
             FROM reviews WHERE id = ?1",
            params![id],
            review_row,
        )
        .optional()?;

    row.map(review_from_row).transpose()
}

pub fn list_reviews(conn: &Connection) -> Result<Vec<Review>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, dentist_name, description, professionalism, communication,
         cleanliness, date_of_review
         FROM reviews ORDER BY id",
    )?;
    let rows = stmt.query_map([], review_row)?;

    let mut reviews = Vec::new();
    for row in rows {
        reviews.push(review_from_row(row?)?);
    }
    Ok(reviews)
}

type ReviewRow = (i64, String, String, i64, i64, i64, String);

fn review_row(row: &Row<'_>) -> Result<ReviewRow, rusqlite::Error> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn review_from_row(row: ReviewRow) -> Result<Review, DatabaseError> {
    let (id, dentist_name, description, professionalism, communication, cleanliness, date) = row;
    let date_of_review =
        NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| DatabaseError::CorruptRow {
            table: "reviews".into(),
            reason: e.to_string(),
        })?;
    Ok(Review {
        id,
        dentist_name,
        description,
        professionalism,
        communication,
        cleanliness,
        date_of_review,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    #[test]
    fn insert_find_and_list() {
        let conn = open_memory_database().unwrap();
        let id = insert_review(
            &conn,
            &Review {
                id: 0,
                dentist_name: "Dr. Lee".into(),
                description: "Painless filling, clear explanations.".into(),
                professionalism: 5,
                communication: 5,
                cleanliness: 4,
                date_of_review: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            },
        )
        .unwrap();

        let found = find_review(&conn, id).unwrap().unwrap();
        assert_eq!(found.professionalism, 5);
        assert_eq!(found.date_of_review.to_string(), "2026-08-01");
        assert_eq!(list_reviews(&conn).unwrap().len(), 1);
    }

    #[test]
    fn empty_table_lists_empty() {
        let conn = open_memory_database().unwrap();
        assert!(list_reviews(&conn).unwrap().is_empty());
        assert!(find_review(&conn, 1).unwrap().is_none());
    }
}
