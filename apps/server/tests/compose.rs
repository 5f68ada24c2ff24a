use clap::Parser;
use mona::domain::config::{AppConfig, AppConfigInner, DeploymentConfiguration, OfferConfiguration};
use mona::domain::constants::NAME_CLAIM;
use mona::domain::subscription::{MarketplaceUser, Subscription};
use mona::kernel::security::claims::Claims;
use mona_server::{Cli, Command, ComposeArgs, compose, compose_landing_page};
use std::fs;

fn config() -> AppConfig {
    AppConfig::from(AppConfigInner {
        deployment: DeploymentConfiguration {
            name: "contoso".to_owned(),
            is_test_mode_enabled: true,
            ..DeploymentConfiguration::default()
        },
        offer: OfferConfiguration {
            offer_display_name: Some("Contoso Cloud".to_owned()),
            ..OfferConfiguration::default()
        },
        ..AppConfigInner::default()
    })
}

#[test]
fn cli_parses_compose_arguments() {
    let cli = Cli::try_parse_from([
        "mona",
        "compose",
        "--config",
        "/etc/mona.toml",
        "--subscription",
        "sub.json",
        "--error-code",
        "E001",
    ])
    .expect("parse");

    assert_eq!(cli.config, std::path::PathBuf::from("/etc/mona.toml"));
    let Command::Compose(args) = cli.command else { panic!("expected compose") };
    assert_eq!(args.error_code.as_deref(), Some("E001"));
    assert!(args.claims.is_none());
}

#[test]
fn cli_defaults_config_path() {
    let cli = Cli::try_parse_from(["mona", "check"]).expect("parse");

    assert_eq!(cli.config, std::path::PathBuf::from("mona.toml"));
    assert!(matches!(cli.command, Command::Check));
}

#[test]
fn anonymous_page_without_subscription_has_offer_and_test_mode() {
    let model = compose_landing_page(&config(), None, None, None).expect("compose");

    assert_eq!(model.offer_display_name.as_deref(), Some("Contoso Cloud"));
    assert_eq!(model.in_test_mode, Some(true));
    assert!(model.user_friendly_name.is_none());
    assert!(model.subscription_id.is_none());
    assert!(!model.has_error());
}

#[test]
fn full_page_includes_every_source() {
    let claims = Claims::new().with(NAME_CLAIM, "Ada Lovelace");
    let subscription = Subscription {
        subscription_id: "sub-1".to_owned(),
        seat_quantity: Some(5),
        purchaser: Some(MarketplaceUser { user_email: "buyer@fabrikam.com".to_owned(), ..Default::default() }),
        beneficiary: Some(MarketplaceUser { user_email: "user@fabrikam.com".to_owned(), ..Default::default() }),
        ..Subscription::default()
    };

    let model = compose_landing_page(&config(), Some(&claims), Some(&subscription), Some("E001"))
        .expect("compose");

    assert_eq!(model.user_friendly_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(model.subscription_id.as_deref(), Some("sub-1"));
    assert_eq!(model.purchaser_email_address.as_deref(), Some("buyer@fabrikam.com"));
    assert_eq!(model.error_code.as_deref(), Some("E001"));
}

#[test]
fn empty_error_code_is_rejected() {
    assert!(compose_landing_page(&config(), None, None, Some("")).is_err());
}

#[test]
fn compose_reads_json_inputs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let claims = dir.path().join("claims.json");
    let subscription = dir.path().join("subscription.json");
    fs::write(&claims, r#"{ "name": "Ada Lovelace" }"#).expect("write claims");
    fs::write(
        &subscription,
        r#"{
            "subscriptionId": "sub-1",
            "planId": "gold",
            "isFreeTrial": true,
            "purchaser": { "userEmail": "buyer@fabrikam.com" },
            "beneficiary": { "userEmail": "user@fabrikam.com" }
        }"#,
    )
    .expect("write subscription");

    let args = ComposeArgs { claims: Some(claims), subscription: Some(subscription), error_code: None };
    let model = compose(&config(), &args).expect("compose");

    assert_eq!(model.user_friendly_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(model.plan_id.as_deref(), Some("gold"));
    assert_eq!(model.is_free_trial, Some(true));
}

#[test]
fn subscription_without_parties_fails_to_compose() {
    let dir = tempfile::tempdir().expect("temp dir");
    let subscription = dir.path().join("subscription.json");
    fs::write(&subscription, r#"{ "subscriptionId": "sub-1" }"#).expect("write subscription");

    let args = ComposeArgs { claims: None, subscription: Some(subscription), error_code: None };
    let err = compose(&config(), &args).unwrap_err();

    assert!(err.to_string().contains("beneficiary"), "unexpected error: {err}");
}
