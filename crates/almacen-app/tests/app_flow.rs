//! End-to-end flow against an in-memory database: register a user, log
//! in, manage the catalog, record movements, read the alert listing and
//! generate the file artifacts.

use almacen_app::{AuthService, InventoryService, ReportService};
use almacen_core::CoreError;
use almacen_db::{Database, DbConfig};

async fn test_db() -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    db.run_migrations().await.unwrap();
    db
}

#[tokio::test]
async fn full_store_workflow() {
    let db = test_db().await;
    let out = tempfile::tempdir().unwrap();

    let auth = AuthService::new(db.clone());
    let inventory = InventoryService::new(db.clone());
    let reports = ReportService::new(db.clone(), out.path());

    // Register and log in
    auth.register_user("Paula", "paula@tienda.com", "contrasena123")
        .await
        .unwrap();
    let ctx = auth.login("paula@tienda.com", "contrasena123").await.unwrap();
    assert_eq!(ctx.name, "Paula");

    // Catalog
    let cafe = inventory
        .register_product(&ctx, "Cafe molido 500g", 10, 1250, None)
        .await
        .unwrap();
    let azucar = inventory
        .register_product(&ctx, "Azucar 1kg", 3, 450, Some("imagenes/azucar.png".into()))
        .await
        .unwrap();

    // Movements
    assert_eq!(inventory.record_inbound(&ctx, cafe.id, 5).await.unwrap(), 15);
    assert_eq!(
        inventory.record_outbound(&ctx, cafe.id, 4).await.unwrap(),
        11
    );

    let err = inventory
        .record_outbound(&ctx, azucar.id, 20)
        .await
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("Azucar 1kg"));

    // Alerts: only azucar sits at or below 5
    let low = inventory.low_stock_alerts(&ctx, None).await.unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].id, azucar.id);

    // Artifacts
    let xlsx = reports.export_inventory_xlsx(&ctx).await.unwrap();
    let pdf = reports.export_inventory_pdf(&ctx).await.unwrap();
    assert!(std::fs::metadata(&xlsx).unwrap().len() > 0);
    assert!(std::fs::metadata(&pdf).unwrap().len() > 0);

    // Invoice: 4 x cafe + skipped zero row
    let (invoice, factura) = reports
        .generate_invoice(&ctx, "Alice", &[(cafe.id, 4), (azucar.id, 0)])
        .await
        .unwrap();
    assert_eq!(invoice.lines.len(), 1);
    assert_eq!(invoice.total.cents(), 5000);
    assert!(factura.exists());

    // The invoice does not touch stock
    let all = inventory.list_products(&ctx).await.unwrap();
    assert_eq!(all.iter().find(|p| p.id == cafe.id).unwrap().quantity, 11);
}

#[tokio::test]
async fn second_registration_with_same_email_fails() {
    let auth = AuthService::new(test_db().await);

    auth.register_user("Paula", "paula@tienda.com", "contrasena123")
        .await
        .unwrap();
    let err = auth
        .register_user("Pablo", "paula@tienda.com", "otracontrasena")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "El correo ya está registrado: paula@tienda.com"
    );
}

#[tokio::test]
async fn movement_against_unknown_product_names_the_id() {
    let inventory = InventoryService::new(test_db().await);
    let auth_ctx = almacen_app::AuthContext {
        user_id: 1,
        name: "Paula".into(),
        email: "paula@tienda.com".into(),
    };

    let err = inventory
        .record_outbound(&auth_ctx, 123, 1)
        .await
        .unwrap_err();
    match err {
        almacen_app::AppError::Core(CoreError::ProductNotFound(id)) => assert_eq!(id, 123),
        other => panic!("expected ProductNotFound, got {other:?}"),
    }
}
