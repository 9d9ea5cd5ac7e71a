// Category filter set for the event listing UI

/// The fixed set of category chips shown above the event grid.
///
/// `All` is the default selection and disables category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Music,
    Festival,
    FoodAndWine,
    Comedy,
    Markets,
    Adventure,
    Art,
    Opera,
    Entertainment,
    Sports,
}

impl Category {
    /// Every category in chip display order, `All` first.
    pub const ALL: [Category; 11] = [
        Category::All,
        Category::Music,
        Category::Festival,
        Category::FoodAndWine,
        Category::Comedy,
        Category::Markets,
        Category::Adventure,
        Category::Art,
        Category::Opera,
        Category::Entertainment,
        Category::Sports,
    ];

    /// Display label, also the exact string stored on event rows.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Music => "Music",
            Category::Festival => "Festival",
            Category::FoodAndWine => "Food & Wine",
            Category::Comedy => "Comedy",
            Category::Markets => "Markets",
            Category::Adventure => "Adventure",
            Category::Art => "Art",
            Category::Opera => "Opera",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
        }
    }

    /// Badge color token for event cards. Unknown or absent categories get
    /// the neutral token.
    pub fn badge_color(category: Option<&str>) -> &'static str {
        match category {
            Some("Music") => "pink",
            Some("Festival") => "purple",
            Some("Food & Wine") => "orange",
            Some("Comedy") => "yellow",
            Some("Markets") => "green",
            Some("Adventure") => "red",
            Some("Art") => "blue",
            Some("Opera") => "indigo",
            Some("Entertainment") => "teal",
            Some("Sports") => "emerald",
            _ => "gray",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "Music" => Category::Music,
            "Festival" => Category::Festival,
            "Food & Wine" => Category::FoodAndWine,
            "Comedy" => Category::Comedy,
            "Markets" => Category::Markets,
            "Adventure" => Category::Adventure,
            "Art" => Category::Art,
            "Opera" => Category::Opera,
            "Entertainment" => Category::Entertainment,
            "Sports" => Category::Sports,
            _ => Category::All,
        }
    }
}
