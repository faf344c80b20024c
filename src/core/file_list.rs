//! Released file list loading, naming and ordering.

use std::cmp::Ordering;

use super::error::FetchError;
use super::transport::Transport;
use crate::models::{FileListResponse, FileListResult, ReleasedFile, SortOrder};

/// Fetch the released files for a workspace.
///
/// One GET, no retry. The result is sorted by name with short names
/// filled in.
pub async fn load_file_list<T: Transport + ?Sized>(
    transport: &T,
    files_url: &str,
    auth_token: &str,
) -> FileListResult {
    match fetch_files(transport, files_url, auth_token).await {
        Ok(files) => FileListResult::Loaded(files),
        Err(e) => FileListResult::Failed(e),
    }
}

async fn fetch_files<T: Transport + ?Sized>(
    transport: &T,
    files_url: &str,
    auth_token: &str,
) -> Result<Vec<ReleasedFile>, FetchError> {
    let response = transport.get(files_url, auth_token).await?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status));
    }
    let FileListResponse { mut files } = response.json()?;

    assign_short_names(&mut files);
    sort_files(&mut files, SortOrder::Name);
    Ok(files)
}

/// Length in bytes of the prefix removed from every name.
///
/// This is the longest common prefix of all names, cut back to just after
/// its last `/`, so only whole directory components are removed. A single
/// file keeps its full name.
pub fn shared_prefix_len<'a, I>(names: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = names.into_iter();
    let Some(first) = names.next() else {
        return 0;
    };
    let first = first.as_bytes();

    let mut common = first.len();
    let mut count = 1;
    for name in names {
        count += 1;
        common = first[..common]
            .iter()
            .zip(name.as_bytes())
            .take_while(|(a, b)| a == b)
            .count();
    }
    if count < 2 {
        return 0;
    }

    first[..common]
        .iter()
        .rposition(|b| *b == b'/')
        .map_or(0, |slash| slash + 1)
}

/// Fill in `short_name` for every file.
pub fn assign_short_names(files: &mut [ReleasedFile]) {
    let prefix = shared_prefix_len(files.iter().map(|f| f.name.as_str()));
    for file in files.iter_mut() {
        file.short_name = file.name[prefix..].to_string();
    }
}

/// Stable sort in place. Equal keys keep their current order.
pub fn sort_files(files: &mut [ReleasedFile], order: SortOrder) {
    match order {
        SortOrder::Name => files.sort_by_cached_key(|f| f.name.to_lowercase()),
        SortOrder::Newest => files.sort_by(compare_newest_first),
    }
}

/// Newest first; files without a parseable date go last.
fn compare_newest_first(a: &ReleasedFile, b: &ReleasedFile) -> Ordering {
    match (a.timestamp(), b.timestamp()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::HttpResponse;
    use crate::core::transport::mock::MockTransport;

    fn file(name: &str, date: &str) -> ReleasedFile {
        ReleasedFile {
            name: name.to_string(),
            short_name: String::new(),
            id: name.to_string(),
            url: format!("https://files/{}", name),
            date: date.to_string(),
            sha256: String::new(),
            size: 10,
            is_deleted: false,
        }
    }

    fn short_names(names: &[&str]) -> Vec<String> {
        let mut files: Vec<_> = names.iter().map(|n| file(n, "")).collect();
        assign_short_names(&mut files);
        files.into_iter().map(|f| f.short_name).collect()
    }

    #[test]
    fn test_short_names_strip_shared_directory() {
        assert_eq!(
            short_names(&["emis/data-001.csv", "emis/data-002.csv"]),
            vec!["data-001.csv", "data-002.csv"]
        );
    }

    #[test]
    fn test_short_names_single_file_untouched() {
        assert_eq!(short_names(&["emis/data.csv"]), vec!["emis/data.csv"]);
    }

    #[test]
    fn test_short_names_no_shared_directory() {
        assert_eq!(
            short_names(&["report.html", "results.csv"]),
            vec!["report.html", "results.csv"]
        );
        assert_eq!(
            short_names(&["out/a.csv", "output/b.csv"]),
            vec!["out/a.csv", "output/b.csv"]
        );
    }

    #[test]
    fn test_short_names_nested_directories() {
        assert_eq!(
            short_names(&["a/b/c/x.txt", "a/b/d/y.txt", "a/b/z.txt"]),
            vec!["c/x.txt", "d/y.txt", "z.txt"]
        );
    }

    #[test]
    fn test_short_names_repeated_characters() {
        assert_eq!(
            short_names(&["aa/aa/1.txt", "aa/aab/2.txt"]),
            vec!["aa/1.txt", "aab/2.txt"]
        );
    }

    #[test]
    fn test_short_names_multibyte() {
        assert_eq!(
            short_names(&["données/é1.csv", "données/é2.csv"]),
            vec!["é1.csv", "é2.csv"]
        );
    }

    #[test]
    fn test_prefix_is_order_independent() {
        let a = ["x/y/1.csv", "x/y/2.csv", "x/z.csv"];
        let b = ["x/z.csv", "x/y/2.csv", "x/y/1.csv"];
        assert_eq!(shared_prefix_len(a), shared_prefix_len(b));
        assert_eq!(shared_prefix_len(std::iter::empty()), 0);
    }

    #[test]
    fn test_sort_by_name_case_insensitive_and_stable() {
        let mut files = vec![
            file("b.csv", ""),
            file("A.csv", ""),
            file("a.csv", ""),
            file("C.csv", ""),
        ];
        sort_files(&mut files, SortOrder::Name);
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A.csv", "a.csv", "b.csv", "C.csv"]);
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let mut files = vec![
            file("old", "2023-01-01T00:00:00Z"),
            file("bad", "not a date"),
            file("new", "2024-06-01T12:00:00+01:00"),
            file("mid", "2023-06-01T00:00:00Z"),
        ];
        sort_files(&mut files, SortOrder::Newest);
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["new", "mid", "old", "bad"]);

        let mut files = vec![
            file("old", "2023-01-01T00:00:00Z"),
            file("naive", "2025-06-01T12:00:00"),
            file("date_only", "2025-07-01"),
        ];
        sort_files(&mut files, SortOrder::Newest);
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["date_only", "naive", "old"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut files = vec![
            file("z", "2023-01-01T00:00:00Z"),
            file("Y", "2024-01-01T00:00:00Z"),
            file("x", "2024-01-01T00:00:00Z"),
        ];
        for order in [SortOrder::Name, SortOrder::Newest] {
            sort_files(&mut files, order);
            let once = files.clone();
            sort_files(&mut files, order);
            assert_eq!(files, once);
        }
    }

    #[tokio::test]
    async fn test_load_file_list_success() {
        let body = r#"{"files": [
            {"name":"out/b.csv","id":"2","url":"/f/2","date":"2024-01-02T00:00:00Z","sha256":"x","size":5},
            {"name":"out/A.txt","id":"1","url":"/f/1","date":"2024-01-01T00:00:00Z","sha256":"y","size":6}
        ]}"#;
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(200, body)));

        let result = load_file_list(&transport, "/api/files", "token-1").await;

        let FileListResult::Loaded(files) = result else {
            panic!("expected loaded list");
        };
        assert_eq!(files[0].short_name, "A.txt");
        assert_eq!(files[1].short_name, "b.csv");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "/api/files");
        assert_eq!(requests[0].token, "token-1");
    }

    #[tokio::test]
    async fn test_load_file_list_http_error() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(403, "{}")));
        let result = load_file_list(&transport, "/api/files", "t").await;
        assert_eq!(result, FileListResult::Failed(FetchError::HttpError(403)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_load_file_list_network_error() {
        let transport =
            MockTransport::new().reply(Err(FetchError::NetworkError("offline".to_string())));
        let result = load_file_list(&transport, "/api/files", "t").await;
        assert!(matches!(result, FileListResult::Failed(FetchError::NetworkError(_))));
    }

    #[tokio::test]
    async fn test_load_file_list_bad_json() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(200, "<html>")));
        let result = load_file_list(&transport, "/api/files", "t").await;
        assert!(matches!(result, FileListResult::Failed(FetchError::JsonParseError(_))));
    }
}
