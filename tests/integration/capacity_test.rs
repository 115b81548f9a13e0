//! Lots of varying layouts admit exactly as many cars as they have slots.

use parkhub_core::config::AppConfig;
use parkhub_entity::{Category, Ticket};
use parkhub_service::Parking;

use crate::helpers::TestApp;

fn layout(sizes: [usize; 3]) -> Vec<(Category, Vec<String>)> {
    Category::ALL
        .iter()
        .zip(sizes)
        .map(|(category, size)| {
            let names = (0..size).map(|i| format!("{}-{i}", category.as_str())).collect();
            (*category, names)
        })
        .collect()
}

#[tokio::test]
async fn test_restricted_categories_fill_to_their_own_size() {
    for sizes in [[0, 0, 0], [1, 2, 3], [5, 0, 7], [3, 4, 0]] {
        let parking = Parking::new(layout(sizes), |_: &Ticket| 0.0).unwrap();
        let app = TestApp::with_parking(AppConfig::default(), parking);

        for (category, size) in ["secondary_compatible", "tertiary_compatible"]
            .into_iter()
            .zip([sizes[1], sizes[2]])
        {
            for _ in 0..size {
                assert!(app.enter(category).await.is_some(), "{category} {sizes:?}");
            }
            assert!(app.enter(category).await.is_none(), "{category} {sizes:?}");
        }
    }
}

#[tokio::test]
async fn test_primary_fills_the_whole_lot() {
    for sizes in [[0, 0, 0], [1, 1, 1], [2, 0, 3], [0, 4, 1]] {
        let parking = Parking::new(layout(sizes), |_: &Ticket| 0.0).unwrap();
        let app = TestApp::with_parking(AppConfig::default(), parking);
        let total: usize = sizes.iter().sum();

        for _ in 0..total {
            assert!(app.enter("primary").await.is_some(), "{sizes:?}");
        }
        assert!(app.enter("primary").await.is_none(), "{sizes:?}");

        let (_, pool) = app.request("GET", "/api/parking/pool").await;
        assert_eq!(pool["data"]["active_tickets"], total);
    }
}

#[tokio::test]
async fn test_primary_uses_its_own_slots_before_falling_back() {
    let parking = Parking::new(layout([2, 2, 2]), |_: &Ticket| 0.0).unwrap();
    let app = TestApp::with_parking(AppConfig::default(), parking);

    let mut categories = Vec::new();
    for _ in 0..6 {
        app.enter("primary").await.expect("space left");
    }
    for ticket in app.parking.list_tickets().await {
        categories.push(ticket.slot.category);
    }

    assert_eq!(
        categories,
        vec![
            Category::Primary,
            Category::Primary,
            Category::SecondaryCompatible,
            Category::SecondaryCompatible,
            Category::TertiaryCompatible,
            Category::TertiaryCompatible,
        ]
    );
}
