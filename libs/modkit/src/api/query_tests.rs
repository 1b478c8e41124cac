#[cfg(test)]
mod tests {
    use crate::api::query::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<ListParams, crate::api::problem::ProblemResponse> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _body) = request.into_parts();
        extract_list_params(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extract_all_params() {
        let params = extract("/movies?filter=title:alien&sort=year:desc&page=2&pageSize=25")
            .await
            .unwrap();
        assert_eq!(params.filter.as_deref(), Some("title:alien"));
        assert_eq!(params.sort.as_deref(), Some("year:desc"));
        assert_eq!(params.page, Some(2));
        assert_eq!(params.page_size, Some(25));
    }

    #[tokio::test]
    async fn test_extract_empty() {
        let params = extract("/movies").await.unwrap();
        assert!(params.filter.is_none());
        assert!(params.sort.is_none());
        assert!(params.page.is_none());
        assert!(params.page_size.is_none());
    }

    #[tokio::test]
    async fn test_extract_decodes_pipes_and_colons() {
        let uri = format!(
            "/movies?filter={}",
            urlencoding::encode("genres:drama|crime,released:1999-03-31T00:00:00Z")
        );
        let params = extract(&uri).await.unwrap();
        assert_eq!(
            params.filter.as_deref(),
            Some("genres:drama|crime,released:1999-03-31T00:00:00Z")
        );
    }

    #[tokio::test]
    async fn test_extract_non_numeric_page_is_bad_request() {
        let problem = extract("/movies?page=two").await.unwrap_err();
        assert_eq!(problem.0.status, 400);
        assert_eq!(problem.0.code, INVALID_PARAMETERS_CODE);
        assert_ne!(problem.0.type_url, "about:blank");
    }

    #[tokio::test]
    async fn test_extract_filter_too_long() {
        let uri = format!("/movies?filter=title:{}", "a".repeat(MAX_FILTER_LEN));
        let problem = extract(&uri).await.unwrap_err();
        assert_eq!(problem.0.status, 400);
        assert_eq!(problem.0.detail, "Filter too long");
        assert_eq!(problem.0.code, FILTER_TOO_LONG_CODE);
        assert_eq!(problem.0.parameter.as_deref(), Some(FILTER_PARAM));
        assert_eq!(
            problem.0.type_url,
            "https://errors.catalog.local/QUERY_FILTER_TOO_LONG"
        );
    }

    #[tokio::test]
    async fn test_extract_sort_too_long() {
        let uri = format!("/movies?sort={}", "y".repeat(MAX_SORT_LEN + 1));
        let problem = extract(&uri).await.unwrap_err();
        assert_eq!(problem.0.code, SORT_TOO_LONG_CODE);
        assert_eq!(problem.0.parameter.as_deref(), Some(SORT_PARAM));
    }

    #[tokio::test]
    async fn test_list_query_extractor() {
        use axum::extract::FromRequestParts;

        let request = Request::builder()
            .uri("/movies?pageSize=10")
            .body(())
            .unwrap();
        let (mut parts, _body) = request.into_parts();
        let ListQuery(params) = ListQuery::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(params.page_size, Some(10));
    }
}
