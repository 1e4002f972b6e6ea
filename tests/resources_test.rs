use httpmock::prelude::*;
use pivnet::http_utils::default_user_agent;
use pivnet::model::FileGroup;
use pivnet::pivnet::{CreateProductFileConfig, CreateUserGroupConfig};
use pivnet::{ApiError, ClientConfig, PivnetClient};
use serde_json::json;

fn client_for(server: &MockServer) -> PivnetClient {
    PivnetClient::new(ClientConfig {
        host: server.base_url(),
        token: Some("some-token".to_string()),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_requests_carry_token_and_user_agent() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/products")
            .header("authorization", "Bearer some-token")
            .header("user-agent", default_user_agent());
        then.status(200).json_body(json!({"products": []}));
    });

    let products = client_for(&server).products().list().await.unwrap();

    mock.assert();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/products")
            .header("user-agent", "my-pipeline/1.0");
        then.status(200).json_body(json!({"products": []}));
    });

    let client = PivnetClient::new(ClientConfig {
        host: server.base_url(),
        token: None,
        user_agent: "my-pipeline/1.0".to_string(),
    })
    .unwrap();
    client.products().list().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_host_with_trailing_slash() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/products/banana");
        then.status(200)
            .json_body(json!({"id": 8, "slug": "banana", "name": "Banana"}));
    });

    let client = PivnetClient::new(ClientConfig {
        host: format!("{}/", server.base_url()),
        ..Default::default()
    })
    .unwrap();
    let product = client.products().get("banana").await.unwrap();

    mock.assert();
    assert_eq!(product.name, "Banana");
}

#[tokio::test]
async fn test_malformed_json_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/products");
        then.status(200).body("{not json");
    });

    let error = client_for(&server).products().list().await.unwrap_err();
    assert!(matches!(error, ApiError::JsonError(_)));
}

#[tokio::test]
async fn test_eulas() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v2/eulas");
        then.status(200).json_body(json!({
            "eulas": [
                {"id": 1, "slug": "eula_1", "name": "EULA 1"},
                {"id": 2, "slug": "eula_2", "name": "EULA 2"}
            ]
        }));
    });
    let get = server.mock(|when, then| {
        when.method(GET).path("/api/v2/eulas/eula_1");
        then.status(200).json_body(json!({
            "id": 1,
            "slug": "eula_1",
            "name": "EULA 1",
            "content": "Do not steal bananas"
        }));
    });
    let client = client_for(&server);

    let eulas = client.eulas().list().await.unwrap();
    let eula = client.eulas().get("eula_1").await.unwrap();

    list.assert();
    get.assert();
    assert_eq!(eulas.len(), 2);
    assert_eq!(eulas[1].slug, "eula_2");
    assert_eq!(eula.content.as_deref(), Some("Do not steal bananas"));
}

#[tokio::test]
async fn test_accept_eula() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/products/banana/releases/1234/eula_acceptance");
        then.status(200)
            .json_body(json!({"accepted_at": "2016-01-11"}));
    });

    let acceptance = client_for(&server)
        .eulas()
        .accept("banana", 1234)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(acceptance.accepted_at, "2016-01-11");
}

#[tokio::test]
async fn test_accept_eula_unexpected_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/products/banana/releases/1234/eula_acceptance");
        then.status(418);
    });

    let error = client_for(&server)
        .eulas()
        .accept("banana", 1234)
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Pivnet returned status code: 418 for the request - expected 200"
    );
}

#[tokio::test]
async fn test_release_types() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/releases/release_types");
        then.status(200).json_body(json!({
            "release_types": ["Major Release", "Minor Release", "Maintenance Release"]
        }));
    });

    let release_types = client_for(&server).release_types().list().await.unwrap();

    mock.assert();
    assert_eq!(
        release_types,
        vec!["Major Release", "Minor Release", "Maintenance Release"]
    );
}

#[tokio::test]
async fn test_product_files_for_product_and_release() {
    let server = MockServer::start_async().await;
    let for_product = server.mock(|when, then| {
        when.method(GET).path("/api/v2/products/banana/product_files");
        then.status(200).json_body(json!({
            "product_files": [
                {"id": 3, "name": "banana.tgz", "aws_object_key": "product-files/banana.tgz"},
                {"id": 4, "name": "cookies.tgz"}
            ]
        }));
    });
    let for_release = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/products/banana/releases/12/product_files");
        then.status(200)
            .json_body(json!({"product_files": [{"id": 3, "name": "banana.tgz"}]}));
    });
    let client = client_for(&server);

    let all = client.product_files().list("banana").await.unwrap();
    let in_release = client
        .product_files()
        .list_for_release("banana", 12)
        .await
        .unwrap();

    for_product.assert();
    for_release.assert();
    assert_eq!(all.len(), 2);
    assert_eq!(
        all[0].aws_object_key.as_deref(),
        Some("product-files/banana.tgz")
    );
    assert_eq!(in_release.len(), 1);
}

#[tokio::test]
async fn test_get_product_file_unwraps_envelope() {
    let server = MockServer::start_async().await;
    let get = server.mock(|when, then| {
        when.method(GET).path("/api/v2/products/banana/product_files/3");
        then.status(200)
            .json_body(json!({"product_file": {"id": 3, "name": "banana.tgz", "size": 1024}}));
    });
    let get_for_release = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/products/banana/releases/12/product_files/3");
        then.status(200)
            .json_body(json!({"product_file": {"id": 3, "name": "banana.tgz", "md5": "abc"}}));
    });
    let client = client_for(&server);

    let product_file = client.product_files().get("banana", 3).await.unwrap();
    let release_file = client
        .product_files()
        .get_for_release("banana", 12, 3)
        .await
        .unwrap();

    get.assert();
    get_for_release.assert();
    assert_eq!(product_file.size, Some(1024));
    assert_eq!(release_file.md5.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_create_product_file() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/products/banana/product_files")
            .json_body(json!({
                "product_file": {
                    "name": "banana.tgz",
                    "aws_object_key": "product-files/banana.tgz",
                    "file_version": "1.0",
                    "md5": "some-md5",
                    "file_type": "Software"
                }
            }));
        then.status(201)
            .json_body(json!({"product_file": {"id": 9, "name": "banana.tgz"}}));
    });

    let config = CreateProductFileConfig {
        product_slug: "banana".to_string(),
        name: "banana.tgz".to_string(),
        aws_object_key: "product-files/banana.tgz".to_string(),
        file_version: "1.0".to_string(),
        md5: "some-md5".to_string(),
        ..Default::default()
    };
    let product_file = client_for(&server)
        .product_files()
        .create(&config)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(product_file.id, 9);
}

#[tokio::test]
async fn test_add_and_remove_product_file() {
    let server = MockServer::start_async().await;
    let add = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/releases/12/add_product_file")
            .json_body(json!({"product_file": {"id": 3}}));
        then.status(204);
    });
    let remove = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/releases/12/remove_product_file")
            .json_body(json!({"product_file": {"id": 3}}));
        then.status(204).body("ignored");
    });
    let add_to_group = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/file_groups/5/add_product_file")
            .json_body(json!({"product_file": {"id": 3}}));
        then.status(204);
    });
    let client = client_for(&server);

    client
        .product_files()
        .add_to_release("banana", 12, 3)
        .await
        .unwrap();
    client
        .product_files()
        .remove_from_release("banana", 12, 3)
        .await
        .unwrap();
    client
        .product_files()
        .add_to_file_group("banana", 5, 3)
        .await
        .unwrap();

    add.assert();
    remove.assert();
    add_to_group.assert();
}

#[tokio::test]
async fn test_add_product_file_unexpected_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/releases/12/add_product_file");
        then.status(418);
    });

    let error = client_for(&server)
        .product_files()
        .add_to_release("banana", 12, 3)
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Pivnet returned status code: 418 for the request - expected 204"
    );
}

#[tokio::test]
async fn test_delete_product_file_returns_deleted_file() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/v2/products/banana/product_files/3");
        then.status(200)
            .json_body(json!({"product_file": {"id": 3, "name": "banana.tgz"}}));
    });

    let deleted = client_for(&server)
        .product_files()
        .delete("banana", 3)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(deleted.name, "banana.tgz");
}

#[tokio::test]
async fn test_find_product_file_by_name() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/products/banana/product_files");
        then.status(200).json_body(json!({
            "product_files": [{"id": 3, "name": "banana.tgz"}]
        }));
    });
    let client = client_for(&server);

    let found = client
        .product_files()
        .find_by_name("banana", "banana.tgz")
        .await
        .unwrap();
    assert_eq!(found.id, 3);

    let error = client
        .product_files()
        .find_by_name("banana", "banana")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "product file 'banana' not found");
}

#[tokio::test]
async fn test_file_groups() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v2/products/banana/file_groups");
        then.status(200).json_body(json!({
            "file_groups": [{
                "id": 5,
                "name": "Docs",
                "product": {"id": 8, "name": "Banana"},
                "product_files": [{"id": 3, "name": "banana.pdf"}]
            }]
        }));
    });
    let list_for_release = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/products/banana/releases/12/file_groups");
        then.status(200).json_body(json!({"file_groups": []}));
    });
    let get = server.mock(|when, then| {
        when.method(GET).path("/api/v2/products/banana/file_groups/5");
        then.status(200).json_body(json!({"id": 5, "name": "Docs"}));
    });
    let client = client_for(&server);

    let groups = client.file_groups().list("banana").await.unwrap();
    let release_groups = client
        .file_groups()
        .list_for_release("banana", 12)
        .await
        .unwrap();
    let group = client.file_groups().get("banana", 5).await.unwrap();

    list.assert();
    list_for_release.assert();
    get.assert();
    assert_eq!(groups[0].product.as_ref().unwrap().name, "Banana");
    assert_eq!(groups[0].product_files[0].name, "banana.pdf");
    assert!(release_groups.is_empty());
    assert_eq!(group.name, "Docs");
}

#[tokio::test]
async fn test_file_group_mutations() {
    let server = MockServer::start_async().await;
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/products/banana/file_groups")
            .json_body(json!({"file_group": {"name": "Docs"}}));
        then.status(201).json_body(json!({"id": 5, "name": "Docs"}));
    });
    let update = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/file_groups/5")
            .json_body(json!({"file_group": {"name": "Documentation"}}));
        then.status(200)
            .json_body(json!({"id": 5, "name": "Documentation"}));
    });
    let add_to_release = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/releases/12/add_file_group")
            .json_body(json!({"file_group": {"id": 5}}));
        then.status(204);
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/v2/products/banana/file_groups/5");
        then.status(200)
            .json_body(json!({"id": 5, "name": "Documentation"}));
    });
    let client = client_for(&server);

    let created = client.file_groups().create("banana", "Docs").await.unwrap();
    let renamed = FileGroup {
        name: "Documentation".to_string(),
        ..created
    };
    let updated = client
        .file_groups()
        .update("banana", &renamed)
        .await
        .unwrap();
    client
        .file_groups()
        .add_to_release("banana", 12, updated.id)
        .await
        .unwrap();
    let deleted = client.file_groups().delete("banana", 5).await.unwrap();

    create.assert();
    update.assert();
    add_to_release.assert();
    delete.assert();
    assert_eq!(deleted.name, "Documentation");
}

#[tokio::test]
async fn test_release_upgrade_paths() {
    let server = MockServer::start_async().await;
    let get = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/products/banana/releases/12/upgrade_paths");
        then.status(200).json_body(json!({
            "upgrade_paths": [
                {"release": {"id": 10, "version": "1.0.0"}},
                {"release": {"id": 11, "version": "1.1.0"}}
            ]
        }));
    });
    let add = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/releases/12/add_upgrade_path")
            .json_body(json!({"upgrade_path": {"release_id": 11}}));
        then.status(204);
    });
    let client = client_for(&server);

    let upgrade_paths = client
        .release_upgrade_paths()
        .get("banana", 12)
        .await
        .unwrap();
    client
        .release_upgrade_paths()
        .add("banana", 12, 11)
        .await
        .unwrap();

    get.assert();
    add.assert();
    assert_eq!(upgrade_paths.len(), 2);
    assert_eq!(upgrade_paths[1].release.version, "1.1.0");
}

#[tokio::test]
async fn test_user_groups() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v2/user_groups");
        then.status(200).json_body(json!({
            "user_groups": [{"id": 1, "name": "group 1", "description": "first"}]
        }));
    });
    let list_for_release = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/products/banana/releases/12/user_groups");
        then.status(200).json_body(json!({
            "user_groups": [{"id": 2, "name": "group 2"}]
        }));
    });
    let get = server.mock(|when, then| {
        when.method(GET).path("/api/v2/user_groups/2");
        then.status(200).json_body(json!({
            "id": 2,
            "name": "group 2",
            "members": ["a@example.com"]
        }));
    });
    let client = client_for(&server);

    let all = client.user_groups().list().await.unwrap();
    let scoped = client
        .user_groups()
        .list_for_release("banana", 12)
        .await
        .unwrap();
    let group = client.user_groups().get(2).await.unwrap();

    list.assert();
    list_for_release.assert();
    get.assert();
    assert_eq!(all[0].description.as_deref(), Some("first"));
    assert_eq!(scoped[0].name, "group 2");
    assert_eq!(group.members, vec!["a@example.com"]);
}

#[tokio::test]
async fn test_user_group_mutations() {
    let server = MockServer::start_async().await;
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/user_groups")
            .json_body(json!({
                "user_group": {
                    "name": "testers",
                    "description": "",
                    "members": ["a@example.com", "b@example.com"]
                }
            }));
        then.status(201).json_body(json!({"id": 7, "name": "testers"}));
    });
    let add_to_release = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v2/products/banana/releases/12/add_user_group")
            .json_body(json!({"user_group": {"id": 7}}));
        then.status(204);
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/v2/user_groups/7");
        then.status(204);
    });
    let client = client_for(&server);

    let config = CreateUserGroupConfig {
        name: "testers".to_string(),
        description: String::new(),
        members: vec!["a@example.com".to_string(), "b@example.com".to_string()],
    };
    let created = client.user_groups().create(&config).await.unwrap();
    client
        .user_groups()
        .add_to_release("banana", 12, created.id)
        .await
        .unwrap();
    client.user_groups().delete(created.id).await.unwrap();

    create.assert();
    add_to_release.assert();
    delete.assert();
}
