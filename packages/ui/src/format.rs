//! Display formats for timestamps. Times are shown in UTC.

use chrono::{DateTime, Datelike, Utc};

/// `MM/DD/YYYY hh:mm AM`, used on comments.
pub fn comment_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%m/%d/%Y %I:%M %p").to_string()
}

/// `M/D/YYYY`, used on posts.
pub fn post_date(at: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", at.month(), at.day(), at.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_timestamp() {
        let at: DateTime<Utc> = "2024-03-05T14:07:00Z".parse().unwrap();
        assert_eq!(comment_timestamp(&at), "03/05/2024 02:07 PM");

        let midnight: DateTime<Utc> = "2024-12-25T00:30:00Z".parse().unwrap();
        assert_eq!(comment_timestamp(&midnight), "12/25/2024 12:30 AM");
    }

    #[test]
    fn test_post_date_has_no_padding() {
        let at: DateTime<Utc> = "2024-03-05T14:07:00Z".parse().unwrap();
        assert_eq!(post_date(&at), "3/5/2024");
    }
}
