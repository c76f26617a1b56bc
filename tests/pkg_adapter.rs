mod common;

use common::{RecordingRunner, argv_of};
use hostdeck::pkg::{PROBE_ORDER, PackageAdapter, PackageManager, PkgOutcome};

#[test]
fn detect_is_deterministic_for_a_fixed_host() {
    let probe = |name: &str| name == "apt" || name == "yum";
    let first = PackageManager::detect_with(probe);
    let second = PackageManager::detect_with(probe);
    assert_eq!(first, Some(PackageManager::Apt));
    assert_eq!(first, second);
}

#[test]
fn detect_always_returns_the_highest_priority_match() {
    // With every binary present, each prefix of the priority order wins.
    for (index, expected) in PROBE_ORDER.iter().enumerate() {
        let present: Vec<&'static str> = PROBE_ORDER[index..]
            .iter()
            .map(|manager| manager.name())
            .collect();
        let detected = PackageManager::detect_with(|name| present.contains(&name));
        assert_eq!(detected, Some(*expected));
    }
    assert_eq!(PackageManager::detect_with(|_| false), None);
}

#[test]
fn none_kind_issues_zero_commands() {
    let (runner, calls) = RecordingRunner::with_status(0);
    let adapter = PackageAdapter::new(&runner);

    assert_eq!(adapter.list_installed(None), PkgOutcome::Unsupported);
    assert_eq!(adapter.install(None, "vim"), PkgOutcome::Unsupported);
    assert_eq!(adapter.remove(None, "vim"), PkgOutcome::Unsupported);
    assert_eq!(adapter.update(None), PkgOutcome::Unsupported);

    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn failing_executor_means_install_reports_failure() {
    let (runner, _calls) = RecordingRunner::with_status(1);
    let adapter = PackageAdapter::new(&runner);

    let outcome = adapter.install(Some(PackageManager::Pacman), "foo");
    assert_eq!(outcome, PkgOutcome::Completed { success: false });
    assert!(!outcome.succeeded());
}

#[test]
fn succeeding_executor_means_update_reports_success() {
    let (runner, calls) = RecordingRunner::with_status(0);
    let adapter = PackageAdapter::new(&runner);

    let outcome = adapter.update(Some(PackageManager::Apt));
    assert!(outcome.succeeded());

    let calls = calls.lock().unwrap();
    assert_eq!(argv_of(&calls[0]), ["apt", "update"]);
    assert_eq!(argv_of(&calls[1]), ["apt", "upgrade", "-y"]);
}

#[test]
fn listing_twice_issues_the_same_command_twice() {
    let (runner, calls) = RecordingRunner::with_status(0);
    let adapter = PackageAdapter::new(&runner);

    adapter.list_installed(Some(PackageManager::Dnf));
    adapter.list_installed(Some(PackageManager::Dnf));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(argv_of(&calls[0]), ["dnf", "list", "installed"]);
}

#[test]
fn verb_shapes_follow_each_managers_conventions() {
    let (runner, calls) = RecordingRunner::with_status(0);
    let adapter = PackageAdapter::new(&runner);

    for manager in PROBE_ORDER {
        adapter.list_installed(Some(manager));
        adapter.install(Some(manager), "htop");
        adapter.remove(Some(manager), "htop");
        adapter.update(Some(manager));
    }

    let calls = calls.lock().unwrap();
    let vectors: Vec<Vec<String>> = calls.iter().map(argv_of).collect();
    let expected: Vec<Vec<&str>> = vec![
        // pacman
        vec!["pacman", "-Q"],
        vec!["pacman", "-S", "--noconfirm", "htop"],
        vec!["pacman", "-Rns", "--noconfirm", "htop"],
        vec!["pacman", "-Syu", "--noconfirm"],
        // apt
        vec!["dpkg-query", "-l"],
        vec!["apt-get", "install", "-y", "htop"],
        vec!["apt", "remove", "-y", "htop"],
        vec!["apt", "update"],
        vec!["apt", "upgrade", "-y"],
        // dnf
        vec!["dnf", "list", "installed"],
        vec!["dnf", "install", "-y", "htop"],
        vec!["dnf", "remove", "-y", "htop"],
        vec!["dnf", "update", "-y"],
        vec!["dnf", "upgrade", "-y"],
        // yum
        vec!["yum", "list", "installed"],
        vec!["yum", "install", "-y", "htop"],
        vec!["yum", "remove", "-y", "htop"],
        vec!["yum", "update", "-y"],
        vec!["yum", "upgrade", "-y"],
    ];
    assert_eq!(vectors.len(), expected.len());
    for (actual, wanted) in vectors.iter().zip(&expected) {
        assert_eq!(actual, wanted);
    }
}

#[test]
fn mutating_actions_are_elevated_and_listings_are_not() {
    let (runner, calls) = RecordingRunner::with_status(0);
    let adapter = PackageAdapter::new(&runner);

    adapter.list_installed(Some(PackageManager::Pacman));
    adapter.install(Some(PackageManager::Pacman), "htop");
    adapter.remove(Some(PackageManager::Apt), "htop");
    adapter.update(Some(PackageManager::Yum));

    let calls = calls.lock().unwrap();
    assert!(!calls[0].elevated);
    assert!(calls[1..].iter().all(|spec| spec.elevated));
}
