// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitboard CLI
//!
//! Activates one (or all) of the five dashboard views against the
//! configured fitness API and prints the rendered result to stdout.
//! Logs go to stderr so tables stay pipeable.

use clap::{Parser, ValueEnum};
use fitboard::{
    api::ApiClient,
    config::Config,
    views::{ActivitiesView, LeaderboardView, TeamsView, UsersView, WorkoutsView},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "fitboard", about = "Fitness tracking dashboard")]
struct Cli {
    /// View to activate
    #[arg(value_enum, default_value_t = ViewArg::All)]
    view: ViewArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    Users,
    Activities,
    Teams,
    Leaderboard,
    Workouts,
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::info!(base = %config.api_base, "Starting fitboard");

    let api = ApiClient::new(&config);

    // A view landing in Error still renders (the error panel is the
    // rendering); only config failures abort with a non-zero exit.
    match cli.view {
        ViewArg::Users => {
            let mut view = UsersView::new();
            view.activate(&api).await;
            print_view("Users", &view.render());
        }
        ViewArg::Activities => {
            let mut view = ActivitiesView::new();
            view.activate(&api).await;
            print_view("Activities", &view.render());
        }
        ViewArg::Teams => {
            let mut view = TeamsView::new();
            view.activate(&api).await;
            print_view("Teams", &view.render());
        }
        ViewArg::Leaderboard => {
            let mut view = LeaderboardView::new();
            view.activate(&api).await;
            print_view("Leaderboard", &view.render());
        }
        ViewArg::Workouts => {
            let mut view = WorkoutsView::new();
            view.activate(&api).await;
            print_view("Workouts", &view.render());
        }
        ViewArg::All => {
            let mut users = UsersView::new();
            let mut activities = ActivitiesView::new();
            let mut teams = TeamsView::new();
            let mut leaderboard = LeaderboardView::new();
            let mut workouts = WorkoutsView::new();

            // Each view owns its state exclusively, so activating all five
            // concurrently needs no synchronization.
            tokio::join!(
                users.activate(&api),
                activities.activate(&api),
                teams.activate(&api),
                leaderboard.activate(&api),
                workouts.activate(&api),
            );

            print_view("Users", &users.render());
            print_view("Activities", &activities.render());
            print_view("Teams", &teams.render());
            print_view("Leaderboard", &leaderboard.render());
            print_view("Workouts", &workouts.render());
        }
    }

    Ok(())
}

fn print_view(title: &str, body: &str) {
    println!("== {} ==", title);
    println!("{}", body);
    println!();
}

/// Initialize logging to stderr with a quiet default filter.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitboard=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .with(format)
        .init();
}
