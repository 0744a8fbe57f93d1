//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the core end to end the way a rendering layer would: subscribe
//!   per-column listeners, submit raw input, move an item between columns.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::{
    core_version, default_log_level, init_logging, submit_project, Project, ProjectStatus,
    ProjectStore, RawProjectInput,
};

fn main() {
    let log_dir = std::env::temp_dir().join("taskboard-logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(error) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {error}");
        }
    }

    println!("taskboard_core version={}", core_version());

    let mut store = ProjectStore::new();
    store.subscribe(|projects| render_column(ProjectStatus::Active, &projects));
    store.subscribe(|projects| render_column(ProjectStatus::Finished, &projects));

    let drafts = [
        RawProjectInput {
            title: "Build API".to_string(),
            description: "Design the REST API".to_string(),
            people: "3".to_string(),
        },
        RawProjectInput {
            title: "Docs".to_string(),
            description: "too few title characters".to_string(),
            people: "2".to_string(),
        },
        RawProjectInput {
            title: "Ship frontend".to_string(),
            description: "Wire the board views".to_string(),
            people: "4".to_string(),
        },
    ];

    for draft in &drafts {
        match submit_project(&mut store, draft) {
            Some(id) => println!("accepted `{}` id={id}", draft.title),
            None => println!("rejected `{}`: invalid input", draft.title),
        }
    }

    let first = store
        .projects()
        .first()
        .map(|project| (project.id, project.title.clone()));
    if let Some((id, title)) = first {
        println!("finishing `{title}`");
        store.change_status(id, ProjectStatus::Finished);
    }
}

fn render_column(status: ProjectStatus, projects: &[Project]) {
    let titles: Vec<&str> = projects
        .iter()
        .filter(|project| project.status == status)
        .map(|project| project.title.as_str())
        .collect();
    println!("[{status}] {}", titles.join(", "));
}
