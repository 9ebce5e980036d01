use serde_json::json;

use crate::common::{TestApp, routes};

mod creation {
    use super::*;

    #[tokio::test]
    async fn create_returns_201_and_stores_an_unlinked_record() {
        let app = TestApp::spawn().await;
        let dog = app.pet_type_id("dog").await;

        let res = app
            .post(
                routes::PET_TYPE_DETAILS,
                &json!({
                    "petTypeId": dog,
                    "petTypeName": "dog",
                    "temperament": "Friendly",
                    "length": 10.0,
                    "weight": 20.0
                }),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["message"], "Pet type is created");

        let list = app.get(routes::PET_TYPE_DETAILS).await;
        assert_eq!(list.status, 200);
        let item = &list.body["content"][0];
        assert_eq!(item["temperament"], "Friendly");
        assert_eq!(item["length"], 10.0);
        assert_eq!(item["weight"], 20.0);
        assert!(item["petTypeId"].is_null());
        assert!(item["petTypeName"].is_null());
    }

    #[tokio::test]
    async fn create_rejects_invalid_measurements() {
        let app = TestApp::spawn().await;

        for body in [
            json!({"temperament": "", "length": 1.0, "weight": 1.0}),
            json!({"temperament": "Calm", "length": 0.0, "weight": 1.0}),
            json!({"temperament": "Calm", "length": 1.0, "weight": -2.0}),
        ] {
            let res = app.post(routes::PET_TYPE_DETAILS, &body).await;
            assert_eq!(res.status, 400, "{body}: {}", res.text);
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn create_rejects_malformed_json() {
        let app = TestApp::spawn().await;

        let res = app
            .client
            .post(format!("http://{}{}", app.addr, routes::PET_TYPE_DETAILS))
            .header("Content-Type", "application/json")
            .body("{not json")
            .send()
            .await
            .expect("send");

        assert_eq!(res.status().as_u16(), 400);
    }
}

mod lookup {
    use super::*;

    #[tokio::test]
    async fn get_returns_the_details_linked_to_a_pet_type() {
        let app = TestApp::spawn().await;
        let id = app.create_linked_detail("cat", "Calm", 5.0, 10.0).await;
        let cat = app.pet_type_id("cat").await;

        let res = app.get(&routes::pet_type_detail(cat)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], id);
        assert_eq!(res.body["petType"]["id"], cat);
        assert_eq!(res.body["petType"]["name"], "cat");
        assert_eq!(res.body["temperament"], "Calm");
        assert!(res.body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn get_returns_404_for_unknown_pet_type() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::pet_type_detail(9999)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "PetType not found");
    }

    #[tokio::test]
    async fn get_returns_404_when_pet_type_has_no_details() {
        let app = TestApp::spawn().await;
        let snake = app.pet_type_id("snake").await;

        let res = app.get(&routes::pet_type_detail(snake)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Details not found");
    }
}

mod partial_update {
    use super::*;

    #[tokio::test]
    async fn patch_updates_supplied_fields() {
        let app = TestApp::spawn().await;
        let id = app.create_linked_detail("cat", "Calm", 5.0, 10.0).await;

        let res = app
            .patch(
                &routes::pet_type_detail(id),
                &json!({"temperament": "Aggressive", "length": "15", "weight": 25.0}),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["message"], "PetTypeDetail partially updated");
        assert_eq!(res.body["pet"]["temperament"], "Aggressive");
        assert_eq!(res.body["pet"]["length"], 15.0);
        assert_eq!(res.body["pet"]["weight"], 25.0);
        assert_eq!(res.body["pet"]["petType"]["name"], "cat");
    }

    #[tokio::test]
    async fn patch_with_unsupported_field_saves_nothing() {
        let app = TestApp::spawn().await;
        let id = app.create_linked_detail("cat", "Calm", 5.0, 10.0).await;
        let before = app.stored(id).await.unwrap();

        let res = app
            .patch(
                &routes::pet_type_detail(id),
                &json!({"temperament": "Aggressive", "unknown": "value"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["message"], "Unsupported field: unknown");
        assert_eq!(app.stored(id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn patch_with_non_numeric_length_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.create_detail("Calm", 5.0, 10.0).await;

        let res = app
            .patch(&routes::pet_type_detail(id), &json!({"length": "long"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["message"], "Invalid value for length");
    }

    #[tokio::test]
    async fn patch_with_non_finite_measurement_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.create_detail("Calm", 5.0, 10.0).await;
        let before = app.stored(id).await.unwrap();

        let res = app
            .patch(&routes::pet_type_detail(id), &json!({"length": "NaN"}))
            .await;
        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["message"], "Invalid value for length");

        let res = app
            .patch(&routes::pet_type_detail(id), &json!({"weight": "inf"}))
            .await;
        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["message"], "Invalid value for weight");

        assert_eq!(app.stored(id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn patch_returns_404_for_missing_record_or_pet_type() {
        let app = TestApp::spawn().await;

        let res = app
            .patch(&routes::pet_type_detail(9999), &json!({"weight": 1.0}))
            .await;
        assert_eq!(res.status, 404);

        let id = app.create_detail("Calm", 5.0, 10.0).await;
        let res = app
            .patch(&routes::pet_type_detail(id), &json!({"petTypeId": 9999}))
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "PetType not found");
    }

    #[tokio::test]
    async fn patch_with_empty_map_returns_the_record_unchanged() {
        let app = TestApp::spawn().await;
        let id = app.create_detail("Calm", 5.0, 10.0).await;

        let res = app.patch(&routes::pet_type_detail(id), &json!({})).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["pet"]["id"], id);
        assert_eq!(res.body["pet"]["temperament"], "Calm");
        assert!(res.body["pet"]["petType"].is_null());
    }

    #[tokio::test]
    async fn linking_a_second_record_to_the_same_pet_type_is_rejected() {
        let app = TestApp::spawn().await;
        app.create_linked_detail("dog", "Friendly", 10.0, 20.0).await;
        let other = app.create_detail("Lazy", 12.0, 30.0).await;
        let dog = app.pet_type_id("dog").await;

        let res = app
            .patch(&routes::pet_type_detail(other), &json!({"petTypeId": dog}))
            .await;

        assert_eq!(res.status, 400, "{}", res.text);
    }
}

mod replace {
    use super::*;

    #[tokio::test]
    async fn put_replaces_link_and_measurements() {
        let app = TestApp::spawn().await;
        let id = app.create_linked_detail("cat", "Calm", 5.0, 10.0).await;
        let dog = app.pet_type_id("dog").await;

        let res = app
            .put(
                &routes::pet_type_detail(id),
                &json!({
                    "petTypeId": dog,
                    "petTypeName": "dog",
                    "temperament": "Aggressive",
                    "length": 15.0,
                    "weight": 25.0
                }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["message"], "PetTypeDetail updated");
        assert_eq!(res.body["pet"]["petType"]["id"], dog);
        assert_eq!(res.body["pet"]["temperament"], "Aggressive");

        let linked = app.get(&routes::pet_type_detail(dog)).await;
        assert_eq!(linked.status, 200);
        assert_eq!(linked.body["id"], id);
    }

    #[tokio::test]
    async fn put_returns_404_for_unknown_pet_type() {
        let app = TestApp::spawn().await;
        let id = app.create_detail("Calm", 5.0, 10.0).await;

        let res = app
            .put(
                &routes::pet_type_detail(id),
                &json!({
                    "petTypeId": 9999,
                    "petTypeName": "dragon",
                    "temperament": "Aggressive",
                    "length": 15.0,
                    "weight": 25.0
                }),
            )
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "PetType not found with id: 9999");
    }

    #[tokio::test]
    async fn put_requires_every_field() {
        let app = TestApp::spawn().await;
        let id = app.create_detail("Calm", 5.0, 10.0).await;

        let res = app
            .put(
                &routes::pet_type_detail(id),
                &json!({"temperament": "Aggressive", "length": 15.0, "weight": 25.0}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["message"], "Pet type id is required");
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_the_record_once() {
        let app = TestApp::spawn().await;
        let id = app.create_detail("Calm", 5.0, 10.0).await;

        let res = app.delete(&routes::pet_type_detail(id)).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["message"], "Pet type deleted");
        assert!(app.stored(id).await.is_none());

        let res = app.delete(&routes::pet_type_detail(id)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], format!("PetType ID {id} not found"));
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn list_filters_by_pet_type_name() {
        let app = TestApp::spawn().await;
        app.create_linked_detail("dog", "Friendly", 10.0, 20.0).await;
        app.create_linked_detail("cat", "Calm", 5.0, 10.0).await;

        let res = app.get(&routes::list("name=Dog")).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["totalElements"], 1);
        assert_eq!(res.body["content"][0]["petTypeName"], "dog");
        assert_eq!(res.body["content"][0]["temperament"], "Friendly");
    }

    #[tokio::test]
    async fn list_pages_and_sorts() {
        let app = TestApp::spawn().await;
        app.create_detail("Calm", 5.0, 10.0).await;
        app.create_detail("Friendly", 10.0, 20.0).await;
        app.create_detail("Chirpy", 1.0, 0.2).await;

        let res = app
            .get(&routes::list("page=0&size=2&sort=weight,desc"))
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["number"], 0);
        assert_eq!(res.body["size"], 2);
        assert_eq!(res.body["numberOfElements"], 2);
        assert_eq!(res.body["first"], true);
        assert_eq!(res.body["content"][0]["weight"], 20.0);
        assert_eq!(res.body["content"][1]["weight"], 10.0);

        let res = app.get(&routes::list("page=1&size=2&sort=weight,desc")).await;
        assert_eq!(res.body["content"][0]["weight"], 0.2);
        assert_eq!(res.body["first"], false);
    }

    #[tokio::test]
    async fn list_rejects_unknown_sort_field_and_zero_size() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::list("sort=colour,asc")).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let res = app.get(&routes::list("size=0")).await;
        assert_eq!(res.status, 400);
    }

    #[tokio::test]
    async fn list_handles_page_and_size_at_the_signed_limit() {
        let app = TestApp::spawn().await;
        app.create_detail("Calm", 5.0, 10.0).await;

        let res = app
            .get(&routes::list("page=9223372036854775807&size=2"))
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["empty"], true);
        assert_eq!(res.body["content"], json!([]));

        let res = app.get(&routes::list(&format!("page={}&size=10", u64::MAX))).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["content"], json!([]));

        let res = app.get(&routes::list("size=9223372036854775807")).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["numberOfElements"], 1);

        let res = app.get(&routes::list("size=9223372036854775808")).await;
        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn list_reflects_mutations_made_through_the_api() {
        let app = TestApp::spawn().await;
        let id = app.create_detail("Calm", 5.0, 10.0).await;

        let res = app.get(routes::PET_TYPE_DETAILS).await;
        assert_eq!(res.body["content"][0]["weight"], 10.0);

        // Direct writes stay hidden behind the cached page...
        app.insert_detail_directly("Sneaky").await;
        let res = app.get(routes::PET_TYPE_DETAILS).await;
        assert_eq!(res.body["numberOfElements"], 1);

        // ...until a mutation through the API evicts it.
        let patched = app
            .patch(&routes::pet_type_detail(id), &json!({"weight": 11}))
            .await;
        assert_eq!(patched.status, 200);

        let res = app.get(routes::PET_TYPE_DETAILS).await;
        assert_eq!(res.body["numberOfElements"], 2);
        assert_eq!(res.body["content"][0]["weight"], 11.0);

        app.delete(&routes::pet_type_detail(id)).await;
        let res = app.get(routes::PET_TYPE_DETAILS).await;
        assert_eq!(res.body["numberOfElements"], 1);
        assert_eq!(res.body["content"][0]["temperament"], "Sneaky");
    }
}

mod docs {
    use super::*;

    #[tokio::test]
    async fn openapi_document_lists_the_endpoints() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::OPENAPI).await;

        assert_eq!(res.status, 200);
        assert!(res.body["paths"]["/api/v1/pet-type-details"].is_object());
        assert!(res.body["paths"]["/api/v1/pet-type-details/{id}"].is_object());
    }
}
