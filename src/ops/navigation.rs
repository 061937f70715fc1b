use crate::model::catalogue::{Catalogue, Resolved};

/// Where the user is in the study-files catalogue: the labels walked from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    path: Vec<String>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path<S: AsRef<str>>(path: &[S]) -> Self {
        Navigation {
            path: path.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn enter(&mut self, label: &str) {
        self.path.push(label.to_string());
    }

    /// Step up one level. Returns false when already at the root, meaning
    /// the caller should leave the files view.
    pub fn back(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Jump to a breadcrumb: keep the first `depth` labels.
    pub fn truncate(&mut self, depth: usize) {
        self.path.truncate(depth);
    }

    pub fn breadcrumbs(&self) -> &[String] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn resolve<'a>(&self, catalogue: &'a Catalogue) -> Resolved<'a> {
        catalogue.resolve(&self.path)
    }

    pub fn subject_key<'a>(&self, catalogue: &'a Catalogue) -> Option<&'a str> {
        self.resolve(catalogue).subject_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalogue::{MINISTERIAL_FOLDER, NON_MINISTERIAL_FOLDER};

    #[test]
    fn starts_at_root_folder() {
        let cat = Catalogue::builtin();
        let nav = Navigation::new();
        assert!(nav.is_root());
        assert!(matches!(nav.resolve(&cat), Resolved::Folder(c) if c.len() == 2));
    }

    #[test]
    fn enter_down_to_a_subject() {
        let cat = Catalogue::builtin();
        let mut nav = Navigation::new();
        nav.enter(MINISTERIAL_FOLDER);
        assert_eq!(nav.subject_key(&cat), None);
        nav.enter("اسس التخدير");
        assert_eq!(nav.subject_key(&cat), Some("ministerial-anesthesia-basics"));
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn back_pops_until_root() {
        let mut nav = Navigation::from_path(&[MINISTERIAL_FOLDER, "العناية المركزة"]);
        assert!(nav.back());
        assert!(nav.back());
        assert!(!nav.back());
        assert!(nav.is_root());
    }

    #[test]
    fn breadcrumb_truncation() {
        let mut nav = Navigation::from_path(&[MINISTERIAL_FOLDER, "العناية المركزة"]);
        nav.truncate(1);
        assert_eq!(nav.breadcrumbs(), &[MINISTERIAL_FOLDER.to_string()]);
        nav.truncate(5);
        assert_eq!(nav.depth(), 1);
        nav.truncate(0);
        assert!(nav.is_root());
    }

    #[test]
    fn unknown_path_resolves_to_not_found() {
        let cat = Catalogue::builtin();
        let mut nav = Navigation::new();
        nav.enter(NON_MINISTERIAL_FOLDER);
        nav.enter("missing");
        assert_eq!(nav.resolve(&cat), Resolved::NotFound);
        assert_eq!(nav.subject_key(&cat), None);
    }
}
