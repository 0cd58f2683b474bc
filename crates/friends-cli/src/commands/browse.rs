//! Browse command implementation.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use friends_core::Directory;
use friends_http::HttpImageProbe;

use crate::browser::Browser;
use crate::interact::Terminal;
use crate::router::Route;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Path to start at (/, /friend/ID or /add-friend)
    #[arg(default_value = "/")]
    pub path: String,
}

pub async fn run<D: Directory>(args: BrowseArgs, directory: Arc<D>) -> Result<()> {
    let start = Route::parse(&args.path);
    let mut browser = Browser::open(directory, Arc::new(HttpImageProbe::new()), start).await;

    let mut ui = Terminal::new();
    browser.run(&mut ui).await;

    Ok(())
}
