use std::{io::Write, path::PathBuf};

use logkeep::Manager;

fn main() {
    let dir = PathBuf::from("/tmp/logkeep_demo_gc");
    let _ = std::fs::remove_dir_all(&dir);

    let manager = Manager {
        path: dir.clone(),
        max_files: 3,
    };

    for i in 0..8 {
        std::thread::sleep(std::time::Duration::from_millis(2));
        let mut handle = manager.create(&format!("demo-{i}")).unwrap();
        writeln!(handle, "log file number {i}").unwrap();
        handle.close();
    }

    let files = manager.files().unwrap();
    println!("\n--- GC Summary ---");
    println!("Log directory: {}", dir.display());
    println!("Files remaining (max_files=3): {}", files.len());
    for file in &files {
        println!("  {} (name={}, latest={})", file, file.name, file.latest);
    }
    assert!(files.len() <= 3, "max_files GC should keep at most 3");
}
