//! End-to-end checkout flow: review → pay → confirmation → proofs.

use std::sync::Arc;

use testresult::TestResult;

use folio::{
    checkout::{Checkout, CheckoutState},
    context::AppContext,
    domain::{
        cart::{Cart, CartItem, Price},
        identity::Identity,
        notifications::{MockNotify, NotifyError},
        orders::{MockOrderStore, models::OrderId},
    },
};

fn book(id: &str, title: &str, price: u64, file_url: Option<&str>) -> CartItem {
    CartItem {
        id: id.to_string(),
        title: title.to_string(),
        price: Price::from_minor(price),
        file_url: file_url.map(str::to_string),
    }
}

#[tokio::test]
async fn full_purchase_flow() -> TestResult {
    let cart = Cart::with_items([
        book("dune", "Dune", 12_99, Some("https://cdn.example/dune.epub")),
        book("lotr", "The Lord of the Rings", 19_99, None),
        // A second copy of the same title is an independent purchase event.
        book("lotr", "The Lord of the Rings", 19_99, None),
    ]);

    let mut store = MockOrderStore::new();

    store
        .expect_create_order()
        .once()
        .withf(|order| {
            order.user_id == "reader-1"
                && order.total == Price::from_minor(52_97)
                && order.items.len() == 3
        })
        .return_once(|_| Ok(OrderId::from("order-42")));

    let mut notify = MockNotify::new();

    notify.expect_register_push().once().return_once(|| {
        Err(NotifyError::UnexpectedResponse("denied".to_string()))
    });

    // The middle confirmation fails; the rest of the flow must not notice.
    notify.expect_schedule().times(3).returning(|request| {
        assert_eq!(request.content.sound, "default");
        assert!(
            request.content.data.url.starts_with("folio://order/order-42"),
            "deep link should follow order/<orderId>, got {}",
            request.content.data.url
        );

        if request.content.body.contains("Dune") {
            Ok(())
        } else {
            Err(NotifyError::UnexpectedResponse("status 500".to_string()))
        }
    });

    let ctx = AppContext::new(Arc::new(store), Arc::new(notify), "folio://");

    let mut checkout = Checkout::open(cart, ctx.clone()).await;

    assert_eq!(checkout.total(), Price::from_minor(52_97));
    assert!(checkout.proofs().is_none(), "no proofs before payment");

    let identity = Identity::new("reader-1");
    let order_id = checkout.pay(Some(&identity)).await?;

    assert_eq!(order_id, OrderId::from("order-42"));

    let order = checkout.order().ok_or("expected a committed order")?;
    assert_eq!(order.items, ["dune", "lotr", "lotr"]);

    // Paying again must not hit the store a second time (`once` above) and
    // returns the same id.
    assert_eq!(checkout.pay(Some(&identity)).await?, order_id);

    let proofs = checkout.proofs().ok_or("expected proofs once confirmed")?;
    let tokens: Vec<&str> = proofs.iter().map(|p| p.token.as_str()).collect();

    assert_eq!(
        tokens,
        ["https://cdn.example/dune.epub", "book:lotr", "book:lotr"]
    );

    checkout.continue_shopping();

    let fresh = Checkout::new(Cart::new(), ctx);

    assert!(
        matches!(fresh.state(), CheckoutState::Reviewing { .. }),
        "a re-entered checkout starts fresh"
    );
    assert!(fresh.cart().is_empty(), "fresh checkout has an empty cart");

    Ok(())
}

#[tokio::test]
async fn anonymous_purchase_is_rejected_before_any_write() {
    let mut store = MockOrderStore::new();
    store.expect_create_order().never();

    let mut notify = MockNotify::new();
    notify.expect_schedule().never();

    let ctx = AppContext::new(Arc::new(store), Arc::new(notify), "folio://");

    let mut checkout = Checkout::new(
        Cart::with_items([book("dune", "Dune", 12_99, None)]),
        ctx,
    );

    let result = checkout.pay(None).await;

    assert!(result.is_err(), "anonymous payment must fail");
    assert!(
        matches!(checkout.state(), CheckoutState::Reviewing { .. }),
        "cart must remain on screen after a rejected payment"
    );
}
