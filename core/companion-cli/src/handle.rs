//! Command dispatch.
//!
//! Opens the app context once, runs a single command against it, then prints
//! and dismisses whatever notifications the command raised.

use chrono::Local;
use companion_core::model::{ExperienceUpdate, ProfileUpdate};
use companion_core::{seed, AppContext, StorageConfig};

use crate::cli::{Cli, Command, ExperienceCommand};
use crate::error::CliError;
use crate::output;

pub fn run(cli: Cli, config: &StorageConfig) -> Result<(), CliError> {
    let json = cli.json;
    let mut ctx = AppContext::open(config);

    let result = dispatch(&mut ctx, cli.command, json);

    if let Err(e) = &result {
        ctx.toasts_mut().error("Something went wrong", Some(&e.to_string()));
    }
    flush_toasts(&mut ctx);
    result
}

fn flush_toasts(ctx: &mut AppContext) {
    let ids: Vec<String> = ctx.toasts().visible().iter().map(|t| t.id.clone()).collect();
    for toast in ctx.toasts().visible() {
        output::toast(toast);
    }
    for id in ids {
        ctx.toasts_mut().dismiss(&id);
    }
    ctx.toasts_mut().tick();
}

fn dispatch(ctx: &mut AppContext, command: Command, json: bool) -> Result<(), CliError> {
    match command {
        Command::SignIn { email } => {
            ctx.session_mut().sign_in(&email);
            ctx.toasts_mut().success("Welcome back!", Some(&email));
            Ok(())
        }
        Command::SignUp { email, name } => {
            ctx.session_mut().sign_up(&email, &name);
            ctx.toasts_mut()
                .success("Account created", Some("Complete your profile to get verified."));
            Ok(())
        }
        Command::SignOut => {
            ctx.session_mut().sign_out();
            ctx.toasts_mut().info("Signed out", None);
            Ok(())
        }
        Command::Whoami => {
            let user = ctx.session().user().ok_or(CliError::NotSignedIn)?;
            if json {
                output::json(user)
            } else {
                output::identity(user);
                Ok(())
            }
        }
        Command::Profile(args) => {
            if !ctx.session().is_authenticated() {
                return Err(CliError::NotSignedIn);
            }
            let update = ProfileUpdate::from(args);
            if update.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            ctx.session_mut().update_profile(update);
            ctx.toasts_mut().success("Profile updated", None);
            Ok(())
        }
        Command::Wave { companion_id } => {
            let companion = seed::companion_by_id(&companion_id)
                .ok_or(CliError::UnknownCompanion(companion_id))?;
            let waved = ctx
                .session_mut()
                .toggle_wave(&companion.profile.id)
                .ok_or(CliError::NotSignedIn)?;
            let title = if waved { "Waved" } else { "Wave withdrawn" };
            ctx.toasts_mut().success(title, Some(&companion.profile.name));
            Ok(())
        }
        Command::Companions => {
            let views = ctx.companions();
            if json {
                return output::json(&views);
            }
            for view in &views {
                output::companion_row(view);
            }
            Ok(())
        }
        Command::Destinations => {
            if json {
                return output::json(seed::destinations());
            }
            for dest in seed::destinations() {
                output::destination_row(dest);
            }
            Ok(())
        }
        Command::Experiences(command) => experiences(ctx, command, json),
    }
}

fn experiences(
    ctx: &mut AppContext,
    command: ExperienceCommand,
    json: bool,
) -> Result<(), CliError> {
    match command {
        ExperienceCommand::List { destination, mine } => {
            let user_id = if mine {
                Some(ctx.session().user().ok_or(CliError::NotSignedIn)?.id.clone())
            } else {
                None
            };
            let selected: Vec<_> = ctx
                .experiences()
                .all()
                .iter()
                .filter(|e| destination.as_deref().map_or(true, |d| e.destination_id == d))
                .filter(|e| user_id.as_deref().map_or(true, |u| e.is_hosted_by(u)))
                .collect();
            if json {
                return output::json(&selected);
            }
            for exp in selected {
                output::experience_row(exp);
            }
            Ok(())
        }
        ExperienceCommand::Show { id } => {
            let exp = ctx
                .experiences()
                .get(&id)
                .ok_or(CliError::UnknownExperience(id))?;
            if json {
                output::json(exp)
            } else {
                output::experience_detail(exp);
                Ok(())
            }
        }
        ExperienceCommand::Host(args) => {
            let created = ctx.host_experience(args.into())?;
            println!("{}", created.id);
            Ok(())
        }
        ExperienceCommand::Edit { id, fields } => {
            let update = ExperienceUpdate::from(fields);
            if update.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            let edited = ctx.edit_experience(&id, update)?;
            if json {
                output::json(edited)
            } else {
                output::experience_detail(edited);
                Ok(())
            }
        }
        ExperienceCommand::Delete { id } => {
            let removed = ctx.delete_experience(&id)?;
            tracing::info!(id = %removed.id, "Deleted experience");
            Ok(())
        }
        ExperienceCommand::Join { id } => {
            let today = Local::now().date_naive();
            if !ctx.request_to_join(&id, today)? {
                ctx.toasts_mut().info(
                    "Nothing to do",
                    Some("It's fully booked, or you're already hosting, joined or requested."),
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn exec(config: &StorageConfig, args: &[&str]) -> Result<(), CliError> {
        let mut argv = vec!["companion"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        run(cli, config)
    }

    #[test]
    fn test_sign_up_then_profile_persists() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());

        exec(&config, &["sign-up", "a@b.com", "Al"]).unwrap();
        exec(&config, &["profile", "--bio", "Slow traveller"]).unwrap();

        let ctx = AppContext::open(&config);
        let user = ctx.session().user().unwrap();
        assert_eq!(user.name, "Al");
        assert_eq!(user.bio, "Slow traveller");
        assert!(ctx.toasts().is_empty());
    }

    #[test]
    fn test_profile_requires_sign_in() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());
        let err = exec(&config, &["profile", "--bio", "x"]).unwrap_err();
        assert!(matches!(err, CliError::NotSignedIn));
    }

    #[test]
    fn test_empty_edit_is_rejected() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());
        exec(&config, &["sign-in", "x@y.z"]).unwrap();
        let err = exec(&config, &["experiences", "edit", "exp-1"]).unwrap_err();
        assert!(matches!(err, CliError::EmptyUpdate));
    }

    #[test]
    fn test_host_then_edit_own_experience() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());
        exec(&config, &["sign-up", "a@b.com", "Al"]).unwrap();
        exec(
            &config,
            &[
                "experiences",
                "host",
                "--title",
                "Reef snorkel",
                "--destination",
                "el-nido",
                "--category",
                "island",
                "--date",
                "2025-03-14",
                "--time",
                "08:00",
                "--duration",
                "4 hours",
                "--capacity",
                "6",
                "--vibe",
                "chill",
                "--meeting-point",
                "Pier",
                "--lat",
                "11.19",
                "--lng",
                "119.40",
            ],
        )
        .unwrap();

        let id = AppContext::open(&config).experiences().all()[0].id.clone();
        exec(&config, &["experiences", "edit", &id, "--capacity", "3", "--bring", "Fins"]).unwrap();

        let ctx = AppContext::open(&config);
        let edited = ctx.experiences().get(&id).unwrap();
        assert_eq!(edited.capacity, 3);
        assert_eq!(edited.what_to_bring, vec!["Fins".to_string()]);
    }

    #[test]
    fn test_wave_unknown_companion() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());
        exec(&config, &["sign-in", "x@y.z"]).unwrap();
        let err = exec(&config, &["wave", "nobody"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownCompanion(_)));

        exec(&config, &["wave", "companion-2"]).unwrap();
        assert!(AppContext::open(&config).session().has_waved("companion-2"));
    }
}
