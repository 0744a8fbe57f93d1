use std::cell::RefCell;
use std::rc::Rc;
use taskboard_core::{
    gather_project_input, submit_project, Project, ProjectStatus, ProjectStore, RawProjectInput,
};

fn raw(title: &str, description: &str, people: &str) -> RawProjectInput {
    RawProjectInput {
        title: title.to_string(),
        description: description.to_string(),
        people: people.to_string(),
    }
}

#[test]
fn gather_accepts_the_happy_path_untrimmed() {
    let input = gather_project_input(&raw("Build API", "Design the REST API", " 3 "))
        .expect("valid input should pass");

    assert_eq!(input.title, "Build API");
    assert_eq!(input.description, "Design the REST API");
    assert_eq!(input.people, 3);
}

#[test]
fn gather_rejects_short_title_or_description() {
    assert!(gather_project_input(&raw("Docs", "Design the REST API", "3")).is_none());
    assert!(gather_project_input(&raw("Build API", "tiny", "3")).is_none());
    assert!(gather_project_input(&raw("    ", "Design the REST API", "3")).is_none());
}

#[test]
fn gather_enforces_the_exclusive_people_range() {
    assert!(gather_project_input(&raw("Build API", "Design the REST API", "0")).is_none());
    assert!(gather_project_input(&raw("Build API", "Design the REST API", "5")).is_none());
    for count in ["1", "2", "3", "4"] {
        assert!(
            gather_project_input(&raw("Build API", "Design the REST API", count)).is_some(),
            "count {count} should pass"
        );
    }
}

#[test]
fn gather_rejects_non_numeric_people_counts() {
    assert!(gather_project_input(&raw("Build API", "Design the REST API", "")).is_none());
    assert!(gather_project_input(&raw("Build API", "Design the REST API", "many")).is_none());
    assert!(gather_project_input(&raw("Build API", "Design the REST API", "3.5")).is_none());
    assert!(gather_project_input(&raw("Build API", "Design the REST API", "-1")).is_none());
}

#[test]
fn rejected_submission_leaves_the_store_untouched() {
    let mut store = ProjectStore::new();
    let notifications = Rc::new(RefCell::new(0u32));
    {
        let notifications = Rc::clone(&notifications);
        store.subscribe(move |_| *notifications.borrow_mut() += 1);
    }

    assert!(submit_project(&mut store, &raw("Docs", "too short a title", "2")).is_none());

    assert!(store.projects().is_empty());
    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn board_flow_from_submission_to_finished_column() {
    let mut store = ProjectStore::new();
    let columns: Rc<RefCell<(Vec<String>, Vec<String>)>> = Rc::default();
    {
        let columns = Rc::clone(&columns);
        store.subscribe(move |snapshot: Vec<Project>| {
            let mut columns = columns.borrow_mut();
            columns.0 = titles_with_status(&snapshot, ProjectStatus::Active);
            columns.1 = titles_with_status(&snapshot, ProjectStatus::Finished);
        });
    }

    let api = submit_project(&mut store, &raw("Build API", "Design the REST API", "3"))
        .expect("valid submission should create a project");
    submit_project(&mut store, &raw("Ship frontend", "Wire the board views", "2"))
        .expect("valid submission should create a project");

    assert_eq!(columns.borrow().0, vec!["Build API", "Ship frontend"]);
    assert!(columns.borrow().1.is_empty());

    store.change_status(api, ProjectStatus::Finished);

    assert_eq!(columns.borrow().0, vec!["Ship frontend"]);
    assert_eq!(columns.borrow().1, vec!["Build API"]);
}

fn titles_with_status(projects: &[Project], status: ProjectStatus) -> Vec<String> {
    projects
        .iter()
        .filter(|project| project.status == status)
        .map(|project| project.title.clone())
        .collect()
}
