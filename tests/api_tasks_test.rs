//! Integration tests for the tasks API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;

    use crate::test_utils::{get_json, seed, test_app};

    async fn seeded_app() -> (axum::Router, tempfile::TempDir) {
        let (app, dir) = test_app().await;
        seed(
            &app,
            "taches",
            json!([
                {"id": 1, "titre": "Commander les protections", "statut": "a-faire"},
                {"id": 2, "titre": "Appeler la pharmacie", "statut": "en-cours"},
                {"id": 3, "titre": "Planning de mars", "statut": "terminee"},
                {"id": 4, "titre": "Relancer la mutuelle", "statut": "en-cours", "beneficiaryRef": 1}
            ]),
        )
        .await;
        (app, dir)
    }

    /// Tests all tasks are returned without a filter
    #[tokio::test]
    #[serial]
    async fn it_lists_all_tasks() {
        let (app, _dir) = seeded_app().await;

        let (status, body) = get_json(&app, "/api/taches").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tasks"].as_array().unwrap().len(), 4);
        assert_eq!(
            body["counts"],
            json!({"aFaire": 1, "enCours": 2, "terminee": 1, "total": 4})
        );
    }

    /// Tests filtering by status keeps the full counters
    #[tokio::test]
    #[serial]
    async fn it_filters_by_status() {
        let (app, _dir) = seeded_app().await;

        let (status, body) = get_json(&app, "/api/taches?statut=en-cours").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(body["counts"]["total"], 4);
    }

    /// Tests unknown statuses return 400
    #[tokio::test]
    #[serial]
    async fn it_returns_400_for_unknown_status() {
        let (app, _dir) = seeded_app().await;

        let (status, _) = get_json(&app, "/api/taches?statut=urgent").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    /// Tests an empty collection
    #[tokio::test]
    #[serial]
    async fn it_handles_no_tasks() {
        let (app, _dir) = test_app().await;

        let (_, body) = get_json(&app, "/api/taches").await;
        assert_eq!(body["tasks"], json!([]));
        assert_eq!(body["counts"]["total"], 0);
    }
}
