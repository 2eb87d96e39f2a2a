use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

/// File-type filter offered by the report save dialog.
pub const REPORT_FILTER: (&str, &[&str]) = ("CSV spreadsheet", &["csv"]);

/// Opens an async save dialog for a report, starting in `directory` with
/// `file_name` filled in.
///
/// Returns `None` when the user cancels. The returned path always ends in
/// `.csv`.
pub async fn pick_report_path(
    directory: PathBuf,
    file_name: String,
) -> Option<PathBuf> {
    let (filter_name, extensions) = REPORT_FILTER;

    let file = AsyncFileDialog::new()
        .set_directory(&directory)
        .set_file_name(file_name)
        .add_filter(filter_name, extensions)
        .save_file()
        .await?;
    Some(with_csv_extension(file.path().to_path_buf()))
}

/// Directory the next save dialog should open in after saving to `path`.
pub fn next_export_dir(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Appends `.csv` unless the path already has that extension.
pub fn with_csv_extension(path: PathBuf) -> PathBuf {
    let has_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if has_csv {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".csv");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_existing_csv_extension() {
        let path = PathBuf::from("reports/resource-report-2024-03-15.csv");

        assert_eq!(with_csv_extension(path.clone()), path);
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let path = PathBuf::from("WEEK.CSV");

        assert_eq!(with_csv_extension(path.clone()), path);
    }

    #[test]
    fn adds_extension_when_missing() {
        assert_eq!(
            with_csv_extension(PathBuf::from("reports/week-11")),
            PathBuf::from("reports/week-11.csv")
        );
    }

    #[test]
    fn next_export_dir_is_the_parent_folder() {
        assert_eq!(
            next_export_dir(Path::new("/home/owner/reports/week.csv")),
            Some(PathBuf::from("/home/owner/reports"))
        );
        assert_eq!(next_export_dir(Path::new("week.csv")), None);
    }

    #[test]
    fn adds_extension_after_other_extensions() {
        assert_eq!(
            with_csv_extension(PathBuf::from("week.txt")),
            PathBuf::from("week.txt.csv")
        );
    }
}
