#[cfg(test)]
mod tests {
    use notes::{
        CategoryPolicy, DisplayCategory, DocumentHeader, NotesConfig, NotesError, OutputFormat,
        ReleaseNotes, load_rows,
    };
    use relnotes_tests::{HEADER, sample_export, write_file};
    use std::fs;
    use tempfile::TempDir;

    fn header() -> DocumentHeader {
        DocumentHeader::new("23.0.1", "05-March-2024")
    }

    fn load_sample(dir: &TempDir) -> notes::LoadedTable {
        let path = write_file(dir.path(), "export.csv", &sample_export()).unwrap();
        load_rows(&path, &NotesConfig::default().columns).unwrap()
    }

    #[test]
    fn test_export_to_plain_text() {
        let temp_dir = TempDir::new().unwrap();
        let table = load_sample(&temp_dir);

        assert_eq!(table.solution_version(), Some("23.0.1"));
        assert!(table.has_approval_column);

        let release = ReleaseNotes::build(table.rows, header(), &NotesConfig::default()).unwrap();
        let expected = "Patch Version 23.0.1\n\
                        Release date: 05-March-2024\n\
                        \n\
                        \nNew features\n\n\
                        UI (PROJ-101)\nAdded a dark theme\n\n\
                        Search (PROJ-108)\nFuzzy matching\n\n\
                        \nImprovements\n\n\
                        REST (PROJ-103)\nLists are paged, 50 per page\n\n\
                        MODULE (PROJ-104)\nFaster report generation\n\n\
                        \nBug fixes\n\n\
                        Auth (PROJ-102)\nFixed login timeout\n\n\
                        MODULE (PROJ-106)\nMISSING\n\n\
                        \nRemoval\n\n\
                        Legacy (PROJ-107)\nRemoved the SOAP endpoint\n\n\
                        \nMISSING CATEGORY\n\n\
                        Infra (PROJ-105)\nMoved to new cluster\n\n";

        assert_eq!(release.to_text(), expected);
    }

    #[test]
    fn test_export_to_html() {
        let temp_dir = TempDir::new().unwrap();
        let table = load_sample(&temp_dir);
        let release = ReleaseNotes::build(table.rows, header(), &NotesConfig::default()).unwrap();
        let html = release.render(OutputFormat::Html);

        assert!(html.starts_with(
            "<h3>Patch version 23.0.1</h3><p style=\"font-style: italic;\">Release date: 05-March-2024</p>"
        ));
        assert!(html.contains(
            "<h3 style=\"font-style: italic;\">Bug fixes</h3><p><b>Auth (PROJ-102)</b><br>Fixed login timeout</p>"
        ));
        assert!(html.contains("<h3 style=\"font-style: italic;\">Removal</h3>"));
        assert!(!html.contains("Removals"));
    }

    #[test]
    fn test_every_row_is_rendered_once() {
        let temp_dir = TempDir::new().unwrap();
        let table = load_sample(&temp_dir);
        let row_count = table.len();
        let release = ReleaseNotes::build(table.rows, header(), &NotesConfig::default()).unwrap();

        assert_eq!(release.notes().total_entries(), row_count);

        let text = release.to_text();
        for key in (101..=108).map(|n| format!("(PROJ-{n})")) {
            assert_eq!(text.matches(&key).count(), 1, "{key} should appear once");
        }
    }

    #[test]
    fn test_strict_config_rejects_unknown_category() {
        let temp_dir = TempDir::new().unwrap();
        let table = load_sample(&temp_dir);
        let config = NotesConfig {
            policy: CategoryPolicy::Strict,
            ..NotesConfig::default()
        };

        let err = ReleaseNotes::build(table.rows, header(), &config).unwrap_err();
        assert!(matches!(
            err,
            NotesError::UnknownCategory { ref key, ref category }
                if key == "PROJ-105" && category == "Epic"
        ));
    }

    #[test]
    fn test_config_file_maps_extra_categories() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_file(
            temp_dir.path(),
            "relnotes.toml",
            "policy = \"strict\"\n\n[categories]\n\"Epic\" = \"New feature\"\n",
        )
        .unwrap();
        let (config, found) = NotesConfig::discover(Some(config_path.as_path())).unwrap();
        assert_eq!(found.as_deref(), Some(config_path.as_path()));

        let table = load_sample(&temp_dir);
        let release = ReleaseNotes::build(table.rows, header(), &config).unwrap();

        let features: Vec<_> = release
            .notes()
            .get(DisplayCategory::NewFeature)
            .unwrap()
            .iter()
            .map(|entry| entry.key.as_str())
            .collect();
        assert_eq!(features, vec!["PROJ-101", "PROJ-105", "PROJ-108"]);
        assert!(release.notes().get(DisplayCategory::Missing).is_none());
    }

    #[test]
    fn test_export_without_approval_or_version_columns() {
        let temp_dir = TempDir::new().unwrap();
        let csv = "Vorgangsschlüssel,Benutzerdefinierte Felder (Release Notes Category),Benutzerdefinierte Felder (Release Notes)\n\
                   PROJ-1,Improvement,[Core] Faster startup\n\
                   PROJ-2,Improvement,[Core] Smaller binary\n";
        let path = write_file(temp_dir.path(), "minimal.csv", csv).unwrap();
        let table = load_rows(&path, &NotesConfig::default().columns).unwrap();

        assert!(!table.has_approval_column);
        assert_eq!(table.solution_version(), None);

        let release = ReleaseNotes::build(table.rows, header(), &NotesConfig::default()).unwrap();
        let entries = release.notes().get(DisplayCategory::Improvement).unwrap();
        assert!(entries.iter().all(|entry| entry.approved == "MISSING"));
        assert!(release.to_text().contains("\nImprovements\n\nCore (PROJ-1)\nFaster startup\n\n"));
    }

    #[test]
    fn test_header_only_export_renders_title() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(temp_dir.path(), "empty.csv", &format!("{HEADER}\n")).unwrap();
        let table = load_rows(&path, &NotesConfig::default().columns).unwrap();

        assert!(table.is_empty());
        let release = ReleaseNotes::build(table.rows, header(), &NotesConfig::default()).unwrap();
        assert_eq!(
            release.to_text(),
            "Patch Version 23.0.1\nRelease date: 05-March-2024\n\n"
        );
    }

    #[test]
    fn test_download_artifact_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let table = load_sample(&temp_dir);
        let release = ReleaseNotes::build(table.rows, header(), &NotesConfig::default()).unwrap();

        let link = release.download_link();
        assert_eq!(link.file_name(), "data.txt");
        assert!(link.to_html().contains("download=\"data.txt\""));

        let download_path = temp_dir.path().join(link.file_name());
        fs::write(&download_path, link.decode().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&download_path).unwrap(), release.to_text());
    }

    #[test]
    fn test_copy_board_over_sample() {
        let temp_dir = TempDir::new().unwrap();
        let table = load_sample(&temp_dir);
        let release = ReleaseNotes::build(table.rows, header(), &NotesConfig::default()).unwrap();

        let mut board = release.copy_board();
        // title, date, 5 headings, 8 tickets with two lines each
        assert_eq!(board.len(), 2 + 5 + 16);

        let index = board
            .lines()
            .iter()
            .position(|line| line.text == "Auth (PROJ-102)")
            .unwrap();
        board.mark_copied(index).unwrap();
        assert_eq!(board.label(index).unwrap(), "Auth (PROJ-102)  Copied!");
        assert!(!board.is_copied(index + 1));
    }
}
