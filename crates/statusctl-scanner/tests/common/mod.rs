//! Git fixtures shared by the integration tests

#![allow(dead_code)]

use git2::{Repository, Signature};
use std::fs;
use std::path::Path;

/// Initialize a repository at `path` with one committed file
pub fn init_committed_repo(path: &Path) -> Repository {
    fs::create_dir_all(path).expect("Failed to create repository directory");
    let repo = Repository::init(path).expect("Failed to init repository");
    fs::write(path.join("README.md"), "# fixture\n").expect("Failed to write README.md");

    {
        let mut index = repo.index().expect("Failed to open index");
        index
            .add_path(Path::new("README.md"))
            .expect("Failed to stage README.md");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = repo.find_tree(tree_id).expect("Failed to find tree");
        let sig = Signature::now("Fixture", "fixture@example.com").expect("Bad signature");
        repo.commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
            .expect("Failed to commit");
    }

    repo
}

/// Change the contents of the committed README
pub fn modify_tracked_file(path: &Path) {
    fs::write(path.join("README.md"), "# fixture\n\nedited after commit\n")
        .expect("Failed to modify README.md");
}
