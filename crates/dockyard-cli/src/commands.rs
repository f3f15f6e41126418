//! Subcommand implementations. Each returns the process exit code.

use std::path::Path;
use std::process::ExitCode;

use dockyard_common::{DockError, Rect, Result};
use dockyard_config::{config_to_json, DockyardConfig};
use dockyard_layout::serializer::{layout_to_element, Element};
use dockyard_layout::{check_invariants, DockingManager};

use crate::cli::Command;
use crate::inspect;
use crate::settings::Settings;

pub fn run(command: &Command, config: &DockyardConfig) -> Result<ExitCode> {
    let settings = Settings::from(config);
    match command {
        Command::Inspect {
            file,
            geometry,
            size,
        } => {
            let mut manager = load(file, &settings)?;
            print!("{}", inspect::outline(manager.tree()));
            if *geometry {
                manager.set_main_bounds(Rect::new(0.0, 0.0, size.0, size.1));
                print!("\n{}", inspect::geometry(&manager));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file } => Ok(if check(file, &settings)? {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
        Command::Normalize { file, output } => {
            let manager = load(file, &settings)?;
            match output {
                Some(path) => manager.save_layout_to_path(path)?,
                None => print!("{}", manager.save_layout()?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            println!("{}", config_to_json(config));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(path: &Path, settings: &Settings) -> Result<DockingManager> {
    let mut manager = settings.manager();
    manager.load_layout_from_path(path)?;
    Ok(manager)
}

/// Report every structural problem of the loaded layout, and note when
/// loading had to rewrite the document. Returns whether the layout is clean.
fn check(path: &Path, settings: &Settings) -> Result<bool> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| DockError::Other(format!("failed to read {}: {e}", path.display())))?;
    let manager = load(path, settings)?;
    let tree = manager.tree();

    let violations = check_invariants(tree);
    for violation in &violations {
        println!("error: {violation}");
    }
    if rewritten_on_load(&text, &layout_to_element(tree))? {
        println!("note: loading rewrites this layout; `dockyard normalize` shows the result");
    }
    if !violations.is_empty() {
        return Ok(false);
    }
    println!(
        "ok: {} nodes, {} floating windows",
        tree.node_count(),
        tree.floating_windows().len()
    );
    Ok(true)
}

/// Whether the document differs structurally from what the loaded layout
/// would write back.
fn rewritten_on_load(text: &str, loaded: &Element) -> Result<bool> {
    let original = Element::parse(text)?;
    Ok(&original != loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CANONICAL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Layout>
  <Panel Orientation="Horizontal">
    <DocumentPane Id="5" SelectedIndex="0">
      <Document ContentId="main" Title="main.rs" IsSelected="True"/>
    </DocumentPane>
  </Panel>
  <AnchorSide Side="Left"/>
  <AnchorSide Side="Top"/>
  <AnchorSide Side="Right"/>
  <AnchorSide Side="Bottom"/>
  <FloatingWindows/>
</Layout>
"#;

    fn settings() -> Settings {
        Settings::from(&DockyardConfig::default())
    }

    #[test]
    fn canonical_documents_are_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.xml");
        fs::write(&path, CANONICAL).unwrap();
        let manager = load(&path, &settings()).unwrap();
        assert!(!rewritten_on_load(CANONICAL, &layout_to_element(manager.tree())).unwrap());
    }

    #[test]
    fn garbage_is_reported_as_a_rewrite() {
        let with_empty_pane = CANONICAL.replace(
            "  </Panel>",
            "    <AnchorablePane Id=\"6\"/>\n  </Panel>",
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.xml");
        fs::write(&path, &with_empty_pane).unwrap();
        let manager = load(&path, &settings()).unwrap();
        assert!(rewritten_on_load(&with_empty_pane, &layout_to_element(manager.tree())).unwrap());
        assert!(check(&path, &settings()).unwrap());
    }

    #[test]
    fn normalize_writes_the_collected_layout() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.xml");
        let output = dir.path().join("out.xml");
        fs::write(
            &input,
            CANONICAL.replace("  </Panel>", "    <AnchorablePane Id=\"6\"/>\n  </Panel>"),
        )
        .unwrap();
        let command = Command::Normalize {
            file: input,
            output: Some(output.clone()),
        };
        run(&command, &DockyardConfig::default()).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(!written.contains("AnchorablePane"));
        assert_eq!(
            Element::parse(&written).unwrap(),
            Element::parse(CANONICAL).unwrap()
        );
    }

    #[test]
    fn malformed_documents_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        fs::write(&path, "<Layout><Panel Orientation=\"Diagonal\"/></Layout>").unwrap();
        let err = check(&path, &settings()).unwrap_err();
        assert!(matches!(err, DockError::Format(_)), "{err}");
    }

    #[test]
    fn missing_files_name_the_path() {
        let err = check(Path::new("/nonexistent/layout.xml"), &settings()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/layout.xml"));
    }
}
