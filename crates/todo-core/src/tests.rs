#[cfg(test)]
mod tests {
    use crate::*;
    use std::cell::Cell;

    struct TickingClock(Cell<u64>);

    impl Clock for TickingClock {
        fn now_millis(&self) -> u64 {
            let t = self.0.get();
            self.0.set(t + 1);
            t
        }
    }

    fn home() -> Home {
        Home::with_clock(TickingClock(Cell::new(1_000)))
    }

    fn seeded(home: &Home, titles: &[&str]) -> HomeState {
        titles.iter().fold(HomeState::new(), |s, t| {
            home.reduce(&s, HomeEvent::Add((*t).to_string()))
        })
    }

    fn first_id(state: &HomeState) -> TaskId {
        state.tasks.iter().next().map(|t| t.id).unwrap()
    }

    #[test]
    fn test_buy_milk_walkthrough() {
        let home = home();
        let s = HomeState::new();
        assert_eq!(s.task_count(), 0);

        let s = home.reduce(&s, HomeEvent::Add("Buy milk".into()));
        assert_eq!(s.task_count(), 1);
        let id = first_id(&s);
        assert_eq!(s.tasks.get(id).map(|t| (t.title.as_str(), t.done)), Some(("Buy milk", false)));

        let s = home.reduce(&s, HomeEvent::Add("Buy milk".into()));
        assert_eq!(s.task_count(), 1);
        assert_eq!(s.prompt.map(|p| p.kind), Some(PromptKind::DuplicateTitle));
        let s = home.reduce(&s, HomeEvent::ResolvePrompt(ActionRole::Dismiss));

        let s = home.reduce(&s, HomeEvent::ToggleDone(id));
        let task = s.tasks.get(id).unwrap();
        assert!(task.done);
        assert_eq!(RowAppearance::of(task).title, TitleStyle::Struck);

        let s = home.reduce(&s, HomeEvent::Rename(id, "Buy oat milk".into()));
        let task = s.tasks.get(id).unwrap();
        assert_eq!(task.title, "Buy oat milk");
        assert!(task.done);

        let s = home.reduce(&s, HomeEvent::Remove(id));
        let s = home.reduce(&s, HomeEvent::ResolvePrompt(ActionRole::Confirm));
        assert!(s.tasks.is_empty());
        assert_eq!(s.prompt, None);
    }

    #[test]
    fn test_toggle_twice_restores_list() {
        let home = home();
        let s = seeded(&home, &["a", "b", "c"]);
        for task in s.tasks.iter() {
            let once = home.reduce(&s, HomeEvent::ToggleDone(task.id));
            assert_ne!(once.tasks, s.tasks);
            let twice = home.reduce(&once, HomeEvent::ToggleDone(task.id));
            assert_eq!(twice.tasks, s.tasks);
        }
    }

    #[test]
    fn test_absent_id_leaves_list_unchanged() {
        let home = home();
        let s = seeded(&home, &["a", "b"]);
        let missing = TaskId(7);
        assert!(s.tasks.get(missing).is_none());

        assert_eq!(home.reduce(&s, HomeEvent::ToggleDone(missing)).tasks, s.tasks);
        assert_eq!(
            home.reduce(&s, HomeEvent::Rename(missing, "x".into())).tasks,
            s.tasks
        );
        let asked = home.reduce(&s, HomeEvent::Remove(missing));
        let confirmed = home.reduce(&asked, HomeEvent::ResolvePrompt(ActionRole::Confirm));
        assert_eq!(confirmed.tasks, s.tasks);
    }

    #[test]
    fn test_rename_to_existing_title_is_allowed() {
        let home = home();
        let s = seeded(&home, &["a", "b"]);
        let id = first_id(&s);
        let s = home.reduce(&s, HomeEvent::Rename(id, "b".into()));
        let titles: Vec<_> = s.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "b"]);
    }

    #[test]
    fn test_row_editor_drives_rename() {
        let home = home();
        let s = seeded(&home, &["Buy milk"]);
        let task = s.tasks.iter().next().cloned().unwrap();

        let mut row = RowEditor::new(&task);
        row.start_editing();
        row.set_buffer("Buy bread");
        let (intent, _) = row.submit().unwrap();

        let s = home.reduce(&s, intent.into());
        assert_eq!(s.tasks.get(task.id).unwrap().title, "Buy bread");
        assert_eq!(row.buffer(), "Buy bread");
    }

    #[test]
    fn test_add_input_feeds_controller() {
        let home = home();
        let mut input = AddInput::new();
        input.set_text("Water plants");
        let s = match input.submit() {
            Some(title) => home.reduce(&HomeState::new(), HomeEvent::Add(title)),
            None => HomeState::new(),
        };
        assert_eq!(s.task_count(), 1);
        assert_eq!(Locale::En.strings().task_count(s.task_count()), "You have 1 task");
    }
}
