use std::fmt;

/// The seven public content collections the site renders. A closed enum so
/// an unknown collection name fails the request instead of creating a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCollection {
    Services,
    Branches,
    Team,
    Blog,
    Testimonials,
    Offers,
    Gallery,
}

impl ContentCollection {
    pub const ALL: [ContentCollection; 7] = [
        ContentCollection::Services,
        ContentCollection::Branches,
        ContentCollection::Team,
        ContentCollection::Blog,
        ContentCollection::Testimonials,
        ContentCollection::Offers,
        ContentCollection::Gallery,
    ];

    /// Collection name; doubles as the backing file name.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentCollection::Services => "services",
            ContentCollection::Branches => "branches",
            ContentCollection::Team => "team",
            ContentCollection::Blog => "blog",
            ContentCollection::Testimonials => "testimonials",
            ContentCollection::Offers => "offers",
            ContentCollection::Gallery => "gallery",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ContentCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
