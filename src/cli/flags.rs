use passforge::pass::ClassSet;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub default: bool,
    pub save: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub max_length: Option<usize>,
    /// `-c LIST` replaces the selection outright.
    pub classes: Option<ClassSet>,
    /// Per-class toggles, applied after `classes`.
    pub enable: ClassSet,
    pub disable: ClassSet,
}

impl CliFlags {
    /// Apply the class selection flags on top of `base`.
    pub fn resolve_classes(&self, base: ClassSet) -> ClassSet {
        let mut classes = self.classes.unwrap_or(base);
        for class in self.enable.iter() {
            classes.insert(class);
        }
        for class in self.disable.iter() {
            classes.remove(class);
        }
        classes
    }
}
