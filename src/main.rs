// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod access;
mod card;
mod catalog;
mod command;
mod error;
mod flow;
mod forms;
mod metadata;
mod notify;
mod password;
mod remote;
mod session;
mod state;
mod storage;
mod theme;

use std::process;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use command::App;
use error::Result;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use state::SessionStore;
use storage::IsPersistent;

#[derive(Debug, Subcommand)]
enum Command {
    List(command::list::Command),
    Read(command::read::Command),
    SignIn(command::sign_in::Command),
    SignUp(command::sign_up::Command),
    SignOut(command::sign_out::Command),
    Subscribe(command::subscribe::Command),
    Unlock(command::unlock::Command),
    Theme(command::theme::Command),
    Status(command::status::Command),
}

#[async_trait]
impl command::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(app).await,
            Self::Read(cmd) => cmd.execute(app).await,
            Self::SignIn(cmd) => cmd.execute(app).await,
            Self::SignUp(cmd) => cmd.execute(app).await,
            Self::SignOut(cmd) => cmd.execute(app).await,
            Self::Subscribe(cmd) => cmd.execute(app).await,
            Self::Unlock(cmd) => cmd.execute(app).await,
            Self::Theme(cmd) => cmd.execute(app).await,
            Self::Status(cmd) => cmd.execute(app).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Keep all state in memory instead of the on-disk preference store.
    #[arg(long, env = "PRESSGATE_TRANSIENT")]
    transient: bool,

    #[clap(subcommand)]
    command: Command,
}

fn preference_storage<
    T: Send + Serialize + Sync + for<'de> Deserialize<'de> + Clone + 'static,
>(
    key: &str,
    transient: bool,
) -> Box<dyn storage::Storage<T>> {
    if !transient {
        if let Some(file_storage) = storage::File::new(key) {
            return Box::new(file_storage);
        }

        warn!("We need to fall back to in-memory storage for {key} because no home directory is available");
    }

    Box::new(storage::Memory::<T>::new())
}

async fn run(args: Args) -> Result<()> {
    let auth_storage = preference_storage("authState", args.transient);
    let unlocked_storage = preference_storage("unlockedArticles", args.transient);
    let theme_storage = preference_storage("theme", args.transient);

    if !auth_storage.is_persistent() {
        info!("Running with transient storage; session state will not survive this process");
    }

    let store = SessionStore::hydrate(auth_storage, unlocked_storage, theme_storage).await;

    let mut app = App {
        store,
        remote: Box::new(remote::Simulated::new()),
        notifier: Box::new(notify::ConsoleNotifier),
        prompt: Box::new(password::RpasswordPrompt),
    };

    command::Command::execute(args.command, &mut app).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("PRESSGATE_LOG", "warn")
        .write_style("PRESSGATE_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
