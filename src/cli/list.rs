use roster::config::{Config, SourceKind};
use roster::core::RosterResult;
use roster::di::{ConfigProvider, ServiceContainer};
use roster::fetch::Convention;
use roster::model::User;

/// Options for `roster list`
#[derive(Debug, Default)]
pub struct ListOptions {
    pub url: Option<String>,
    pub fixture: Option<String>,
    pub bundled: bool,
    pub convention: Option<Convention>,
    pub json: bool,
}

pub async fn run(options: ListOptions) -> RosterResult<()> {
    let mut config = Config::load()?;
    apply_options(&mut config, &options);

    let container = ServiceContainer::from_config(config)?;
    let url = container.config().users_url().to_string();
    let convention = container.config().convention();

    tracing::debug!(%url, %convention, "fetching users");
    let users: Vec<User> = container.fetcher().fetch_via(convention, &url).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else {
        print!("{}", render_users(&users));
    }

    Ok(())
}

/// Fold command-line flags over the loaded config
fn apply_options(config: &mut Config, options: &ListOptions) {
    if let Some(ref url) = options.url {
        config.users_url = url.clone();
    }
    if let Some(convention) = options.convention {
        config.convention = convention;
    }
    if options.bundled {
        config.source = SourceKind::Fixture;
        config.fixture_path = None;
    } else if let Some(ref fixture) = options.fixture {
        config.source = SourceKind::Fixture;
        config.fixture_path = Some(fixture.clone());
    }
}

fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users.\n".to_string();
    }

    let mut out = format!("Users ({}):\n", users.len());
    for user in users {
        out.push_str(&format!("  {} <{}>\n", user.name, user.email));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_render_users() {
        let users = vec![
            user(1, "Leanne Graham", "Sincere@april.biz"),
            user(2, "Ervin Howell", "Shanna@melissa.tv"),
        ];
        assert_eq!(
            render_users(&users),
            "Users (2):\n  Leanne Graham <Sincere@april.biz>\n  Ervin Howell <Shanna@melissa.tv>\n"
        );
    }

    #[test]
    fn test_render_no_users() {
        assert_eq!(render_users(&[]), "No users.\n");
    }

    #[test]
    fn test_apply_options_fixture() {
        let mut config = Config::default();
        let options = ListOptions {
            fixture: Some("/data/users.json".to_string()),
            ..Default::default()
        };
        apply_options(&mut config, &options);
        assert_eq!(config.source, SourceKind::Fixture);
        assert_eq!(config.fixture_path.as_deref(), Some("/data/users.json"));
    }

    #[test]
    fn test_apply_options_bundled_wins_over_fixture() {
        let mut config = Config::default();
        let options = ListOptions {
            fixture: Some("/data/users.json".to_string()),
            bundled: true,
            ..Default::default()
        };
        apply_options(&mut config, &options);
        assert_eq!(config.source, SourceKind::Fixture);
        assert!(config.fixture_path.is_none());
    }

    #[test]
    fn test_apply_options_convention_reaches_provider() {
        let mut config = Config::default();
        assert_eq!(config.convention(), Convention::Stream);

        let options = ListOptions {
            convention: Some(Convention::Callback),
            ..Default::default()
        };
        apply_options(&mut config, &options);

        let container = ServiceContainer::from_config(config).unwrap();
        assert_eq!(container.config().convention(), Convention::Callback);
    }

    #[test]
    fn test_apply_options_without_convention_keeps_config() {
        let mut config = Config {
            convention: Convention::Async,
            ..Default::default()
        };
        apply_options(&mut config, &ListOptions::default());
        assert_eq!(config.convention(), Convention::Async);
    }

    #[test]
    fn test_apply_options_url_keeps_source() {
        let mut config = Config::default();
        let options = ListOptions {
            url: Some("http://localhost:8080/users".to_string()),
            ..Default::default()
        };
        apply_options(&mut config, &options);
        assert_eq!(config.users_url, "http://localhost:8080/users");
        assert_eq!(config.source, SourceKind::Network);
    }
}
