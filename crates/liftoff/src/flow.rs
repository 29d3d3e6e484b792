//! Interactive release flow
//!
//! Drives one release end to end: collect defaults from local files, prompt
//! the operator, create the release, optionally attach an asset, announce.
//! Restarting after a missing asset re-enters the collection loop from the
//! top rather than recursing.

use std::path::PathBuf;

use console::style;
use tracing::info;

use liftoff_core::{
    find_file, read_changelog, read_metadata, AnnouncementMessage, ReleaseConfig, ReleaseRequest,
};
use liftoff_discord::Announcer;
use liftoff_github::{HostError, ReleaseHost};

use crate::prompt::{is_no, is_yes, Prompter};

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// One interactive release run
pub struct ReleaseFlow<'a> {
    config: &'a ReleaseConfig,
    workdir: PathBuf,
    prompter: &'a mut dyn Prompter,
    host: &'a dyn ReleaseHost,
    announcer: &'a dyn Announcer,
}

enum Collected {
    Ready(ReleaseRequest),
    Restart,
    Abort,
}

impl<'a> ReleaseFlow<'a> {
    pub fn new(
        config: &'a ReleaseConfig,
        workdir: PathBuf,
        prompter: &'a mut dyn Prompter,
        host: &'a dyn ReleaseHost,
        announcer: &'a dyn Announcer,
    ) -> Self {
        Self {
            config,
            workdir,
            prompter,
            host,
            announcer,
        }
    }

    /// Run the flow to completion.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.collect()? {
                Collected::Restart => continue,
                Collected::Abort => return Ok(()),
                Collected::Ready(request) => return self.publish(request).await,
            }
        }
    }

    /// Gather and confirm everything needed for the release. No remote call
    /// happens here.
    fn collect(&mut self) -> anyhow::Result<Collected> {
        let meta = read_metadata(&self.workdir.join("package.json"));

        let version = self.prompter.ask("Release version", &meta.version)?;
        if version.is_empty() {
            println!("{} A release version is required.", style("✗").red().bold());
            return Ok(Collected::Abort);
        }

        let notes = read_changelog(&self.workdir.join("changelog.md"));
        let description = self.prompter.ask("Release description", &notes)?;
        if description.is_empty() {
            println!(
                "{} A release description is required.",
                style("✗").red().bold()
            );
            return Ok(Collected::Abort);
        }

        let draft = is_yes(&self.prompter.ask("Save as draft? (y/N)", "n")?);
        let upload = is_yes(&self.prompter.ask("Upload an asset? (y/N)", "n")?);

        let mut artifact = None;
        if upload {
            let detected = (!meta.main.is_empty())
                .then(|| find_file(&self.workdir, &meta.main))
                .flatten();
            if let Some(path) = &detected {
                println!(
                    "{} Detected asset from package.json: {}",
                    style("→").blue(),
                    style(path.display()).cyan()
                );
            }
            let default_path = detected
                .map(|p| p.display().to_string())
                .unwrap_or_default();

            let answer = self.prompter.ask("Asset path", &default_path)?;
            if answer.is_empty() {
                println!(
                    "{} No asset path given, continuing without an upload.",
                    style("!").yellow()
                );
            } else {
                match find_file(&self.workdir, &answer) {
                    Some(path) => {
                        println!(
                            "{} Asset found: {}",
                            style("✓").green(),
                            style(path.display()).cyan()
                        );
                        artifact = Some(path);
                    }
                    None => {
                        println!("{} Asset not found: {}", style("✗").red(), answer);
                        if is_yes(&self.prompter.ask("Start over? (y/N)", "n")?) {
                            return Ok(Collected::Restart);
                        }
                        println!("{} Continuing without an upload.", style("!").yellow());
                    }
                }
            }
        }

        println!();
        println!("{}", style("Release Preview").bold());
        println!();
        println!("  Version:     {}", style(&version).green().bold());
        println!("  Repository:  {}", style(self.config.repo_slug()).cyan());
        println!("  Draft:       {}", if draft { "yes" } else { "no" });
        println!(
            "  Asset:       {}",
            artifact
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string())
        );
        println!("  Description: {}", preview(&description));
        println!();

        if is_no(&self.prompter.ask("Create release? (Y/n)", "y")?) {
            println!("{}", style("Aborted.").yellow());
            return Ok(Collected::Abort);
        }

        Ok(Collected::Ready(ReleaseRequest {
            tag: version,
            description,
            draft,
            artifact,
        }))
    }

    /// Perform the remote calls. Release creation is fatal to the run; asset
    /// upload and the announcement are not.
    async fn publish(&self, request: ReleaseRequest) -> anyhow::Result<()> {
        info!(
            tag = %request.tag,
            draft = request.draft,
            has_artifact = request.artifact.is_some(),
            "publishing release"
        );

        println!("{} Creating release...", style("→").blue());
        let release = match self.host.create_release(&request).await {
            Ok(release) => {
                println!(
                    "{} Release created: {}",
                    style("✓").green().bold(),
                    style(&release.html_url).cyan()
                );
                release
            }
            Err(HostError::ApiError { status, message }) => {
                println!(
                    "{} Release creation failed: {}",
                    style("✗").red().bold(),
                    status
                );
                println!("{}", message);
                return Ok(());
            }
            Err(e) => {
                println!("{} Network error: {}", style("✗").red().bold(), e);
                return Ok(());
            }
        };

        if let Some(path) = &request.artifact {
            println!("{} Uploading asset...", style("→").blue());
            match self.host.upload_asset(&release, path).await {
                Ok(()) => println!("{} Asset uploaded.", style("✓").green()),
                Err(e) => println!("{} Asset upload failed: {}", style("!").yellow(), e),
            }
        }

        println!("{} Announcing release...", style("→").blue());
        let message = AnnouncementMessage::new(self.config, &request, &release);
        match self.announcer.announce(&message).await {
            Ok(()) => println!("{} Announcement sent.", style("✓").green()),
            Err(e) => println!("{} Announcement failed: {}", style("!").yellow(), e),
        }

        Ok(())
    }
}

fn preview(description: &str) -> String {
    let mut short: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        short.push_str("...");
    }
    short
}
