use buteco::restaurant::storage::decode_orders;
use buteco::runtime::{open_restaurant, Config, Session};
use std::fs;

/// Full end-to-end run: menu file, interactive session, orders file.
#[test]
fn test_full_session_integration() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let menu_path = dir.path().join("menu.json");
    let orders_path = dir.path().join("pedidos.json");
    fs::write(
        &menu_path,
        r#"[
            {"tipo": "Bebida", "nome": "Coca-Cola", "preco": 5.0, "descricao": "Refrigerante gelado"},
            {"tipo": "Comida", "nome": "X-salada", "preco": 40.0, "descricao": "Pão brioche"}
        ]"#,
    )
    .expect("Failed to write menu file");

    let config = Config::new(&menu_path, &orders_path);
    let restaurant = open_restaurant(&config);
    assert_eq!(restaurant.menu_items().len(), 2);

    // Order A: coke + burger. Order B: two burgers. Then view the empty order and exit.
    let input = "2\n1\n2\n2\n3\n4\n2\n2\n2\n2\n4\n3\n5\n";
    let mut session = Session::new(restaurant, &config.orders_path, input.as_bytes(), Vec::new());
    session.run().expect("Session failed");

    assert!(session.current_order().is_empty());
    let (restaurant, output) = session.into_parts();
    let output = String::from_utf8(output).expect("Session output is not UTF-8");

    assert!(output.contains("Total do pedido: R$45.50"));
    assert_eq!(output.matches("Pedido finalizado e enviado para a cozinha!").count(), 2);
    assert!(output.contains("Total do pedido: R$0.00"));

    let persisted = decode_orders(&fs::read_to_string(&orders_path).expect("Failed to read orders file"))
        .expect("Failed to decode orders file");
    assert_eq!(persisted.len(), 2);
    assert_eq!(
        persisted[0].items,
        vec!["Item: Coca-Cola | Preço: R$5.00", "Item: X-salada | Preço: R$40.00"]
    );
    assert!((persisted[0].total - 45.5).abs() < 1e-9);
    assert_eq!(persisted[1].items, vec!["Item: X-salada | Preço: R$40.00"; 2]);
    assert!((persisted[1].total - 80.0).abs() < 1e-9);
    assert_eq!(persisted, restaurant.finalized_orders());
}

/// A persist failure is reported to the operator and the session keeps going.
#[test]
fn test_session_survives_persist_failure() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let orders_path = dir.path().join("missing").join("pedidos.json");
    let config = Config::new(dir.path().join("menu.json"), &orders_path);

    // Falls back to the built-in menu.
    let restaurant = open_restaurant(&config);

    let input = "2\n5\n4\n3\n5\n";
    let mut session = Session::new(restaurant, &config.orders_path, input.as_bytes(), Vec::new());
    session.run().expect("Session failed");

    let (restaurant, output) = session.into_parts();
    let output = String::from_utf8(output).expect("Session output is not UTF-8");

    assert!(output.contains("Milk-shake adicionado ao pedido!"));
    assert!(output.contains("não foi possível salvar"));
    assert!(!orders_path.exists());
    assert_eq!(restaurant.finalized_orders().len(), 1);
    assert!((restaurant.finalized_orders()[0].total - 17.5).abs() < 1e-9);
}
