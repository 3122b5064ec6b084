use crate::modules::products::adapters::outbound::products::{ProductQueries, ProductRepository};
use crate::modules::products::adapters::outbound::products_in_memory::InMemoryProducts;
use crate::modules::products::core::catalog::ProductQuery;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::delete_product::handler::DeleteProductHandler;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::modules::products::use_cases::update_product::handler::UpdateProductHandler;
use crate::shared::core::pagination::PageRequest;
use std::sync::Arc;

#[tokio::test]
async fn walks_a_product_through_its_lifecycle() {
    let store = Arc::new(InMemoryProducts::seeded());
    let create = CreateProductHandler::new(store.clone());
    let update = UpdateProductHandler::new(store.clone());
    let delete = DeleteProductHandler::new(store.clone());

    let page = store.list(&ProductQuery::default()).await.unwrap();
    assert_eq!(page.products.len(), 5);
    assert_eq!((page.page, page.limit, page.total_pages), (1, 10, 1));
    assert!(
        page.products
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );
    assert_eq!(page.products[0].name, "Apple Watch");

    let created = create
        .handle(CreateProduct {
            name: Some("Test".into()),
            price: Some(10.0),
            category: Some("X".into()),
            stock: Some(1),
            description: None,
        })
        .await
        .unwrap();
    let loaded = store.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.description, "");

    let updated = update
        .handle(UpdateProduct {
            id: created.id,
            stock: Some(5),
            ..UpdateProduct::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.stock, 5);
    assert_eq!(updated.name, "Test");
    assert!(updated.updated_at >= updated.created_at);

    delete.handle(created.id).await.unwrap();
    assert_eq!(store.get_by_id(created.id).await.unwrap(), None);
    assert_eq!(
        delete.handle(created.id).await,
        Err(ApplicationError::NotFound(created.id))
    );
}

#[tokio::test]
async fn pages_cover_the_filtered_set_exactly_once() {
    let store = Arc::new(InMemoryProducts::new());
    let create = CreateProductHandler::new(store.clone());
    for i in 0..23 {
        let category = if i % 3 == 0 { "Even" } else { "Odd" };
        create
            .handle(CreateProduct {
                name: Some(format!("Item {i}")),
                price: Some(1.0 + i as f64),
                category: Some(category.into()),
                stock: Some(i),
                description: Some(if i % 2 == 0 { "Promo".into() } else { String::new() }),
            })
            .await
            .unwrap();
    }

    let everything = store
        .list(&ProductQuery::new(
            Some("Odd".into()),
            None,
            PageRequest::new(1, 100),
        ))
        .await
        .unwrap();

    let limit = 4;
    let first = store
        .list(&ProductQuery::new(
            Some("Odd".into()),
            None,
            PageRequest::new(1, limit),
        ))
        .await
        .unwrap();
    assert_eq!(first.total_pages, everything.total.div_ceil(limit));

    let mut collected = Vec::new();
    for page in 1..=first.total_pages {
        let result = store
            .list(&ProductQuery::new(
                Some("Odd".into()),
                None,
                PageRequest::new(page, limit),
            ))
            .await
            .unwrap();
        collected.extend(result.products);
    }
    assert_eq!(collected, everything.products);

    store.clear().await.unwrap();
    assert!(store.categories().await.unwrap().is_empty());
}
