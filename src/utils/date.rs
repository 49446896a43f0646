use chrono::Local;

/// Today's date in the storage form `YYYY-MM-DD`.
pub fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
