//! Interactive session walking the application's routes.
//!
//! One view is mounted at a time, for the navigator's current route. Every
//! line of input becomes an [`Action`]; after it runs, the view for the new
//! route is mounted (and loaded) if the route changed.

use std::sync::Arc;

use colored::Colorize;
use tracing::debug;

use friends_core::{Directory, DraftField, FriendId, ImageProbe};

use crate::interact::Interaction;
use crate::router::{Navigator, Route};
use crate::views::{CreationView, DetailView, ListView};

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Refresh,
    Help,
    Quit,
    Back,
    Go(Route),
    Search(String),
    Retry,
    Delete(Option<FriendId>),
    Edit,
    Set(DraftField, String),
    Submit,
    Reset,
    Preview,
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Screen<D> {
    List(ListView<D>),
    Detail(DetailView<D>),
    Create(CreationView<D>),
    Unavailable(Route),
}

pub struct Browser<D> {
    directory: Arc<D>,
    probe: Arc<dyn ImageProbe>,
    nav: Navigator,
    mounted: Route,
    screen: Screen<D>,
}

/// Parse one line of input.
pub fn parse_action(line: &str) -> Result<Action, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let action = match command.to_ascii_lowercase().as_str() {
        "" => Action::Refresh,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        "back" => Action::Back,
        "home" => Action::Go(Route::Home),
        "add" => Action::Go(Route::AddFriend),
        "go" if !rest.is_empty() => Action::Go(Route::parse(rest)),
        "open" => Action::Go(Route::Friend(parse_id(rest)?)),
        "search" => Action::Search(rest.to_string()),
        "clear" => Action::Search(String::new()),
        "retry" | "r" => Action::Retry,
        "delete" if rest.is_empty() => Action::Delete(None),
        "delete" => Action::Delete(Some(parse_id(rest)?)),
        "edit" => Action::Edit,
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = field.parse::<DraftField>().map_err(|e| e.to_string())?;
            Action::Set(field, value.trim().to_string())
        }
        "submit" => Action::Submit,
        "reset" => Action::Reset,
        "preview" => Action::Preview,
        other => return Err(format!("Unknown command '{}'. Type 'help' for a list.", other)),
    };

    Ok(action)
}

fn parse_id(s: &str) -> Result<FriendId, String> {
    s.parse::<FriendId>().map_err(|e| e.to_string())
}

impl<D: Directory> Browser<D> {
    /// Start a session at `start`, mounting and loading its view.
    pub async fn open(directory: Arc<D>, probe: Arc<dyn ImageProbe>, start: Route) -> Self {
        let screen = Self::screen_for(&directory, &start).await;
        Self {
            directory,
            probe,
            nav: Navigator::new(start.clone()),
            mounted: start,
            screen,
        }
    }

    #[allow(dead_code)]
    pub fn current(&self) -> &Route {
        self.nav.current()
    }

    async fn screen_for(directory: &Arc<D>, route: &Route) -> Screen<D> {
        match route {
            Route::Home => {
                let mut view = ListView::new(directory.clone());
                view.load().await;
                Screen::List(view)
            }
            Route::Friend(id) => {
                let mut view = DetailView::new(directory.clone(), *id);
                view.load().await;
                Screen::Detail(view)
            }
            Route::AddFriend => Screen::Create(CreationView::new(directory.clone())),
            Route::EditFriend(_) | Route::NotFound(_) => Screen::Unavailable(route.clone()),
        }
    }

    /// Mount the view for the current route if it changed.
    async fn sync(&mut self) {
        let route = self.nav.current().clone();
        if route == self.mounted {
            return;
        }
        debug!(from = %self.mounted, to = %route, "Navigating");

        if let Route::Friend(id) = route
            && let Screen::Detail(view) = &mut self.screen
        {
            view.set_id(id).await;
        } else {
            self.screen = Self::screen_for(&self.directory, &route).await;
        }
        self.mounted = route;
    }

    pub fn render(&self) -> String {
        let header = format!("── {} ──", self.nav.current()).dimmed();
        let body = match &self.screen {
            Screen::List(view) => view.render(),
            Screen::Detail(view) => view.render(),
            Screen::Create(view) => view.render(),
            Screen::Unavailable(Route::EditFriend(id)) => format!(
                "Editing is not available here yet. Use `friends edit {}` instead.\n{}",
                id,
                format!("← Back to Friends  {}", Route::Home).cyan()
            ),
            Screen::Unavailable(route) => format!(
                "Page not found: {}\n{}",
                route,
                format!("← Back to Friends  {}", Route::Home).cyan()
            ),
        };
        format!("{}\n{}", header, body)
    }

    fn help(&self) -> &'static str {
        match &self.screen {
            Screen::List(_) => "search TEXT | clear | delete ID | retry | go PATH | open ID | home | add | back | help | quit",
            Screen::Detail(_) => "delete | edit | retry | go PATH | open ID | home | add | back | help | quit",
            Screen::Create(_) => "set name|photo|description VALUE | submit | reset | preview | go PATH | home | back | help | quit",
            Screen::Unavailable(_) => "go PATH | open ID | home | add | back | help | quit",
        }
    }

    /// Run one action against the mounted view.
    pub async fn apply(&mut self, action: Action, ui: &mut dyn Interaction) -> Flow {
        let action = match action {
            Action::Quit => return Flow::Quit,
            Action::Refresh => None,
            Action::Help => {
                println!("{}", self.help());
                None
            }
            Action::Back => {
                if !self.nav.back() {
                    ui.alert("Already at the first page.");
                }
                None
            }
            Action::Go(route) => {
                self.nav.push(route);
                None
            }
            other => Some(other),
        };

        if let Some(action) = action {
            let handled = match (action, &mut self.screen) {
                (Action::Search(text), Screen::List(view)) => {
                    view.set_search(text);
                    Ok(())
                }
                (Action::Retry, Screen::List(view)) => {
                    view.load().await;
                    Ok(())
                }
                (Action::Delete(Some(id)), Screen::List(view)) => {
                    view.delete(id, ui).await;
                    Ok(())
                }
                (Action::Retry, Screen::Detail(view)) => {
                    view.load().await;
                    Ok(())
                }
                (Action::Delete(None), Screen::Detail(view)) => {
                    view.delete(ui, &mut self.nav).await;
                    Ok(())
                }
                (Action::Edit, Screen::Detail(view)) => {
                    if view.friend().is_some() {
                        self.nav.push(Route::EditFriend(view.id()));
                    }
                    Ok(())
                }
                (Action::Set(field, value), Screen::Create(view)) => {
                    view.set_field(field, value);
                    Ok(())
                }
                (Action::Submit, Screen::Create(view)) => {
                    view.submit(ui, &mut self.nav).await;
                    Ok(())
                }
                (Action::Reset, Screen::Create(view)) => {
                    view.reset();
                    Ok(())
                }
                (Action::Preview, Screen::Create(view)) => {
                    view.refresh_preview(self.probe.as_ref()).await;
                    if view.preview().is_none() {
                        ui.alert("No preview available for this photo URL.");
                    }
                    Ok(())
                }
                (action, _) => Err(action),
            };

            if let Err(action) = handled {
                ui.alert(&format!(
                    "{:?} is not available on {}. Try: {}",
                    action,
                    self.nav.current(),
                    self.help()
                ));
            }
        }

        self.sync().await;
        Flow::Continue
    }

    /// Read and apply actions until the input ends or the user quits.
    pub async fn run(&mut self, ui: &mut dyn Interaction) {
        println!("{}", self.render());

        loop {
            let label = format!("{} >", self.nav.current());
            let Some(line) = ui.prompt(&label) else {
                break;
            };

            let action = match parse_action(&line) {
                Ok(action) => action,
                Err(message) => {
                    ui.alert(&message);
                    continue;
                }
            };

            if self.apply(action, ui).await == Flow::Quit {
                break;
            }
            println!("\n{}", self.render());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::interact::testing::ScriptedUi;
    use crate::views::testing::{Call, FakeDirectory, friend, no_color};

    struct NoImages;

    #[async_trait]
    impl ImageProbe for NoImages {
        async fn probe(&self, _url: &str) -> bool {
            false
        }
    }

    fn directory() -> Arc<FakeDirectory> {
        Arc::new(FakeDirectory::with(vec![
            friend(1, "Marcus", "Runs the Tuesday hike"),
            friend(5, "Dev", "Brews coffee, hates mornings"),
            friend(9, "Priya", "Knows every trail in the valley"),
        ]))
    }

    async fn browser(dir: Arc<FakeDirectory>, start: Route) -> Browser<FakeDirectory> {
        Browser::open(dir, Arc::new(NoImages), start).await
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_action("").unwrap(), Action::Refresh);
        assert_eq!(parse_action("  QUIT ").unwrap(), Action::Quit);
        assert_eq!(
            parse_action("open 5").unwrap(),
            Action::Go(Route::Friend(FriendId::new(5)))
        );
        assert_eq!(
            parse_action("go /add-friend").unwrap(),
            Action::Go(Route::AddFriend)
        );
        assert_eq!(
            parse_action("search coffee lovers").unwrap(),
            Action::Search("coffee lovers".to_string())
        );
        assert_eq!(parse_action("delete").unwrap(), Action::Delete(None));
        assert_eq!(
            parse_action("delete 9").unwrap(),
            Action::Delete(Some(FriendId::new(9)))
        );
        assert_eq!(
            parse_action("set description Plays chess badly").unwrap(),
            Action::Set(DraftField::Description, "Plays chess badly".to_string())
        );
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(parse_action("dance").is_err());
        assert!(parse_action("open abc").is_err());
        assert!(parse_action("set age 40").is_err());
    }

    #[tokio::test]
    async fn opening_a_friend_from_the_list() {
        no_color();
        let dir = directory();
        let mut b = browser(dir.clone(), Route::Home).await;
        let mut ui = ScriptedUi::new();

        b.apply(Action::Go(Route::Friend(FriendId::new(9))), &mut ui).await;

        assert_eq!(b.current(), &Route::Friend(FriendId::new(9)));
        assert!(b.render().contains("Priya"));

        b.apply(Action::Back, &mut ui).await;
        assert_eq!(b.current(), &Route::Home);
        // the list is fetched again on every mount
        assert_eq!(
            dir.calls(),
            vec![
                Call::ListAll,
                Call::GetById(FriendId::new(9)),
                Call::ListAll
            ]
        );
    }

    #[tokio::test]
    async fn switching_friends_reuses_detail_view() {
        let dir = directory();
        let mut b = browser(dir.clone(), Route::Friend(FriendId::new(1))).await;
        let mut ui = ScriptedUi::new();

        b.apply(Action::Go(Route::Friend(FriendId::new(5))), &mut ui).await;

        assert!(matches!(&b.screen, Screen::Detail(v) if v.id() == FriendId::new(5)));
        assert_eq!(
            dir.calls(),
            vec![
                Call::GetById(FriendId::new(1)),
                Call::GetById(FriendId::new(5))
            ]
        );
    }

    #[tokio::test]
    async fn add_friend_flow_ends_on_detail_page() {
        no_color();
        let dir = directory();
        let mut b = browser(dir.clone(), Route::Home).await;
        let mut ui = ScriptedUi::new();

        for line in [
            "add",
            "set name Sam",
            "set photo https://x.test/p.jpg",
            "set description A very good friend indeed",
            "submit",
        ] {
            let action = parse_action(line).unwrap();
            assert_eq!(b.apply(action, &mut ui).await, Flow::Continue);
        }

        assert_eq!(b.current(), &Route::Friend(FriendId::new(10)));
        assert!(b.render().contains("Sam"));
        assert!(ui.alerts.is_empty());
    }

    #[tokio::test]
    async fn delete_from_detail_returns_to_list() {
        no_color();
        let dir = directory();
        let mut b = browser(dir.clone(), Route::Home).await;
        let mut ui = ScriptedUi::answering(&[true]);

        b.apply(Action::Go(Route::Friend(FriendId::new(5))), &mut ui).await;
        b.apply(Action::Delete(None), &mut ui).await;

        assert_eq!(b.current(), &Route::Home);
        assert!(!b.render().contains("Dev"));
        assert_eq!(dir.ids(), vec![1, 9]);
    }

    #[tokio::test]
    async fn edit_route_is_declared_but_unavailable() {
        no_color();
        let mut b = browser(directory(), Route::Friend(FriendId::new(1))).await;
        let mut ui = ScriptedUi::new();

        b.apply(Action::Edit, &mut ui).await;

        assert_eq!(b.current(), &Route::EditFriend(FriendId::new(1)));
        assert!(b.render().contains("friends edit 1"));
    }

    #[tokio::test]
    async fn misplaced_actions_alert() {
        let mut b = browser(directory(), Route::Home).await;
        let mut ui = ScriptedUi::new();

        b.apply(Action::Submit, &mut ui).await;

        assert_eq!(ui.alerts.len(), 1);
        assert_eq!(b.current(), &Route::Home);
    }

    #[tokio::test]
    async fn run_stops_on_quit() {
        let dir = directory();
        let mut b = browser(dir.clone(), Route::Home).await;
        let mut ui = ScriptedUi::answering(&[true]).with_lines(&["search dev", "delete 5", "quit", "add"]);

        b.run(&mut ui).await;

        assert_eq!(dir.ids(), vec![1, 9]);
        assert_eq!(b.current(), &Route::Home);
    }
}
