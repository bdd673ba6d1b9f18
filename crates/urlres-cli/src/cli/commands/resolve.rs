//! `urlres resolve <url>` – one resolution attempt.

use anyhow::{bail, Context, Result};
use urlres_core::config::ResolverConfig;
use urlres_core::fetch::CurlFetcher;
use urlres_core::{record_attempt, ResolutionResult};

fn print_result(r: &ResolutionResult) {
    println!("url:            {}", r.url());
    println!("status:         {}", r.debug_status());
    println!("starting url:   {}", r.is_starting_point());
    if let Some(ct) = r.content_type() {
        println!("content-type:   {}", ct);
    }
    if let Some(len) = r.content_length() {
        println!("content-length: {}", len);
    }
    if let Some(target) = r.redirect_target() {
        println!("redirect:       {}", target);
    }
    if r.did_error_occur() {
        println!("error:          {}", r.error_message());
    }
}

pub fn run_resolve(cfg: &ResolverConfig, url: &str, json: bool) -> Result<()> {
    let fetcher = CurlFetcher::new(cfg);
    let result = record_attempt(&fetcher, url, url);
    tracing::info!(%result, "resolved");

    if json {
        let out = serde_json::to_string_pretty(&result).context("serialize result")?;
        println!("{}", out);
    } else {
        print_result(&result);
    }

    if result.connection_failed() {
        bail!("connection failed for {}: {}", url, result.error_message());
    }
    if result.fatal_error() {
        bail!("could not resolve {}: {}", url, result.error_message());
    }
    Ok(())
}
