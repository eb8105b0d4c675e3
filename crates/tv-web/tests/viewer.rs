//! End-to-end runs of the ticket page against a recording fake page.

mod common;

use anyhow::Result;
use common::{FakePage, LOADING_HTML, Network};
use serde_json::json;
use tv_web::{FailureKind, HttpReply, Labels, TicketViewer, ViewOutcome, ViewerConfig};

const ERROR_HTML: &str = "<p>Błąd podczas ładowania mandatów.</p>";

fn two_tickets() -> String {
    json!([
        {
            "driver_name": "Jan Kowalski",
            "offense": "Przekroczenie prędkości o 30 km/h",
            "fine_amount": 400,
            "penalty_points": 6,
            "issue_date": "2024-03-15"
        },
        {
            "driver_name": "Jan Kowalski",
            "offense": "Jazda bez pasów",
            "fine_amount": "100.5",
            "penalty_points": 5,
            "issue_date": "2024-07-01"
        }
    ])
    .to_string()
}

#[tokio::test]
async fn missing_identifier_redirects_without_request() {
    let page = FakePage::new(Network::Reply(HttpReply::ok("[]")));

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Redirected);
    assert_eq!(*page.redirects.borrow(), vec!["/".to_string()]);
    assert!(page.requests.borrow().is_empty());
    assert_eq!(page.html(), LOADING_HTML);
}

#[tokio::test]
async fn empty_identifier_counts_as_missing() {
    let page = FakePage::with_pesel("", "[]");

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Redirected);
    assert!(page.requests.borrow().is_empty());
}

#[tokio::test]
async fn sends_exactly_one_main_page_request() {
    let page = FakePage::with_pesel("02270803628", "[]");

    TicketViewer::default().run(&page).await;

    let requests = page.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "/api");
    assert_eq!(requests[0].1, json!({ "action": "main_page", "pesel": "02270803628" }));
    assert!(page.redirects.borrow().is_empty());
}

#[tokio::test]
async fn empty_listing_shows_placeholder() {
    let page = FakePage::with_pesel("02270803628", "[]");

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Empty);
    assert_eq!(page.html(), "<p>Brak mandatów.</p>");
    assert_eq!(page.ticket_blocks(), 0);
}

#[tokio::test]
async fn renders_tickets_in_order() -> Result<()> {
    let page = FakePage::with_pesel("02270803628", two_tickets());

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Rendered { count: 2 });
    assert_eq!(page.ticket_blocks(), 2);

    let html = page.html();
    let first = html.find("Przekroczenie prędkości").ok_or_else(|| anyhow::anyhow!("first ticket missing"))?;
    let second = html.find("Jazda bez pasów").ok_or_else(|| anyhow::anyhow!("second ticket missing"))?;
    assert!(first < second);
    assert!(html.contains("<p><strong>Kwota mandatu:</strong> 400 zł</p>"));
    assert!(html.contains("<p><strong>Kwota mandatu:</strong> 100.5 zł</p>"));
    assert!(html.contains("<p><strong>Punkty karne:</strong> 6</p>"));
    assert!(html.contains("<p><strong>Data wystawienia:</strong> 2024-07-01</p>"));
    assert!(!html.contains("Ładowanie"));
    Ok(())
}

#[tokio::test]
async fn fine_text_is_shown_as_sent() {
    let body = json!([
        { "driver_name": "Anna Nowak", "offense": "Parkowanie", "fine_amount": "150.50", "penalty_points": -1, "issue_date": "2024-12-24" }
    ])
    .to_string();
    let page = FakePage::with_pesel("02270803628", body);

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Rendered { count: 1 });
    assert!(page.html().contains("<p><strong>Kwota mandatu:</strong> 150.50 zł</p>"));
    assert!(page.html().contains("<p><strong>Punkty karne:</strong> -1</p>"));
}

#[tokio::test]
async fn loading_placeholder_precedes_result() {
    let page = FakePage::with_pesel("02270803628", "[]");

    TicketViewer::default().run(&page).await;

    let snapshots = page.snapshots.borrow();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0], LOADING_HTML);
}

#[tokio::test]
async fn network_failure_shows_error() {
    let mut page = FakePage::new(Network::Fail("TypeError: Failed to fetch".to_string()));
    page.session.insert("pesel".to_string(), "02270803628".to_string());

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Failed(FailureKind::Network));
    assert_eq!(page.html(), ERROR_HTML);
    assert_eq!(page.ticket_blocks(), 0);
}

#[tokio::test]
async fn malformed_json_shows_error() {
    let page = FakePage::with_pesel("02270803628", "<html>oops</html>");

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Failed(FailureKind::Parse));
    assert_eq!(page.html(), ERROR_HTML);
}

#[tokio::test]
async fn malformed_record_rejects_whole_listing() {
    let body = json!([
        { "driver_name": "A", "offense": "B", "fine_amount": 1, "penalty_points": 1, "issue_date": "C" },
        { "driver_name": "A" }
    ])
    .to_string();
    let page = FakePage::with_pesel("02270803628", body);

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Failed(FailureKind::Parse));
    assert_eq!(page.ticket_blocks(), 0);
    assert_eq!(page.html(), ERROR_HTML);
}

#[tokio::test]
async fn error_status_shows_error_even_with_array_body() {
    let mut page = FakePage::new(Network::Reply(HttpReply {
        status: 500,
        body: "[]".to_string(),
    }));
    page.session.insert("pesel".to_string(), "02270803628".to_string());

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Failed(FailureKind::Status));
    assert_eq!(page.html(), ERROR_HTML);
}

#[tokio::test]
async fn failure_messages_can_be_differentiated() {
    let config = ViewerConfig {
        labels: Labels {
            network_error: "Brak połączenia z serwerem.".to_string(),
            ..Labels::default()
        },
        ..ViewerConfig::default()
    };
    let mut page = FakePage::new(Network::Fail("offline".to_string()));
    page.session.insert("pesel".to_string(), "02270803628".to_string());

    TicketViewer::new(config).run(&page).await;

    assert_eq!(page.html(), "<p>Brak połączenia z serwerem.</p>");
}

#[tokio::test]
async fn rerun_does_not_accumulate_blocks() {
    let page = FakePage::with_pesel("02270803628", two_tickets());
    let viewer = TicketViewer::default();

    viewer.run(&page).await;
    let first = page.html();
    viewer.run(&page).await;

    assert_eq!(page.html(), first);
    assert_eq!(page.ticket_blocks(), 2);
    assert_eq!(page.requests.borrow().len(), 2);
}

#[tokio::test]
async fn missing_container_skips_request() {
    let page = FakePage::with_pesel("02270803628", "[]").without_container();

    let outcome = TicketViewer::default().run(&page).await;

    assert_eq!(outcome, ViewOutcome::Failed(FailureKind::Page));
    assert!(page.requests.borrow().is_empty());
}

#[tokio::test]
async fn custom_config_is_honored() {
    let config = ViewerConfig {
        endpoint: "/citizen/api".to_string(),
        session_key: "citizen_id".to_string(),
        login_path: "/login.html".to_string(),
        currency: "PLN".to_string(),
        ..ViewerConfig::default()
    };

    let redirect_page = FakePage::with_pesel("02270803628", "[]");
    assert_eq!(TicketViewer::new(config.clone()).run(&redirect_page).await, ViewOutcome::Redirected);
    assert_eq!(*redirect_page.redirects.borrow(), vec!["/login.html".to_string()]);

    let mut page = FakePage::new(Network::Reply(HttpReply::ok(two_tickets())));
    page.session.insert("citizen_id".to_string(), "02270803628".to_string());
    TicketViewer::new(config).run(&page).await;
    assert_eq!(page.requests.borrow()[0].0, "/citizen/api");
    assert!(page.html().contains("400 PLN"));
}
