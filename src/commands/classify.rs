//! `classify` command: print the role of each directory.

use anyhow::{bail, Result};

use crate::domain::services::classify;
use crate::domain::value_objects::DirPath;
use crate::presentation::output::{emit_event, render_classification, ClassifiedEvent};

pub fn cmd_classify(dirs: &[String], json: bool) -> Result<()> {
    let mut entries = Vec::with_capacity(dirs.len());
    for raw in dirs {
        let Some(dir) = DirPath::parse(raw) else {
            bail!("'{}' is not a directory inside the tree", raw);
        };
        entries.push((dir.to_string(), classify(&dir)));
    }

    if json {
        for (dir, role) in &entries {
            emit_event(&ClassifiedEvent::new(dir, *role))?;
        }
    } else {
        println!("{}", render_classification(&entries));
    }
    Ok(())
}
