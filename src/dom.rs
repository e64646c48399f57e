//! Render targets: the page slots the projector writes into.
//!
//! [`RenderTarget`] is the narrow surface projection needs: named text slots,
//! the repeated contact rows and stat items, the services container, and
//! global style variables. [`Page`] is the in-memory implementation that
//! [`generate`](crate::generate) serializes to HTML.
//!
//! Slots are optional. A target without a hero subtitle, say, returns `None`
//! from [`RenderTarget::slot_mut`] and the projector skips that write.

use maud::Markup;

/// Single-valued text slots, located by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    MetaDescription,
    HeroLogo,
    HeroTagline,
    HeroSubtitle,
}

/// Which company field a contact row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    WorkingHours,
    Address,
}

impl ContactField {
    /// Parse an explicit `data-contact` key.
    pub fn from_key(key: &str) -> Option<ContactField> {
        match key.trim() {
            "email" => Some(ContactField::Email),
            "phone" | "whatsapp" => Some(ContactField::Phone),
            "working_hours" | "workingHours" | "hours" => Some(ContactField::WorkingHours),
            "address" => Some(ContactField::Address),
            _ => None,
        }
    }

    /// Legacy dispatch: identify the field from the row's icon class list.
    ///
    /// Only email, phone and working hours have markers.
    pub fn from_icon(icon: &str) -> Option<ContactField> {
        icon.split_whitespace().find_map(|class| match class {
            "fa-envelope" => Some(ContactField::Email),
            "fa-whatsapp" => Some(ContactField::Phone),
            "fa-clock" => Some(ContactField::WorkingHours),
            _ => None,
        })
    }

    pub fn key(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::WorkingHours => "working_hours",
            ContactField::Address => "address",
        }
    }
}

/// A contact row: icon, heading, and the value text the projector fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    /// Explicit `data-contact` key. Takes precedence over the icon.
    pub key: Option<String>,
    /// Icon class list, e.g. `fas fa-envelope`.
    pub icon: String,
    pub heading: String,
    pub text: String,
}

impl ContactRow {
    pub fn new(key: Option<&str>, icon: &str, heading: &str, text: &str) -> Self {
        Self {
            key: key.map(str::to_string),
            icon: icon.to_string(),
            heading: heading.to_string(),
            text: text.to_string(),
        }
    }

    /// The field this row displays, if any.
    ///
    /// An explicit key that names no field does not fall back to the icon.
    pub fn field(&self) -> Option<ContactField> {
        match &self.key {
            Some(key) => ContactField::from_key(key),
            None => ContactField::from_icon(&self.icon),
        }
    }
}

/// A statistic: label text plus the counter's target and displayed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatItem {
    /// Explicit `data-metric` key. Takes precedence over the label.
    pub metric: Option<String>,
    pub label: String,
    /// Counter target (`data-target`). `None` until projected.
    pub target: Option<u32>,
    /// Currently displayed counter text.
    pub display: String,
}

impl StatItem {
    pub fn new(metric: Option<&str>, label: &str) -> Self {
        Self {
            metric: metric.map(str::to_string),
            label: label.to_string(),
            target: None,
            display: String::new(),
        }
    }
}

/// A container of generated child fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    children: Vec<String>,
}

impl Container {
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, child: Markup) {
        self.children.push(child.into_string());
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// What the projector needs from a page.
pub trait RenderTarget {
    /// The document title. Always present.
    fn set_title(&mut self, title: &str);

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut String>;

    fn contact_rows_mut(&mut self) -> &mut [ContactRow];

    fn stat_items_mut(&mut self) -> &mut [StatItem];

    fn services_container_mut(&mut self) -> Option<&mut Container>;

    /// Set a global style variable, replacing any previous value.
    fn set_style_var(&mut self, name: &str, value: &str);
}

/// In-memory page.
///
/// Fields are public so callers (and tests) can shape the page: drop a slot,
/// remove a contact row, relabel a stat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub meta_description: Option<String>,
    pub hero_logo: Option<String>,
    pub hero_tagline: Option<String>,
    pub hero_subtitle: Option<String>,
    pub contact_rows: Vec<ContactRow>,
    pub stat_items: Vec<StatItem>,
    pub services: Option<Container>,
    /// Style variables in first-set order.
    pub style_vars: Vec<(String, String)>,
}

impl Page {
    /// The site's page layout with every slot present and empty.
    ///
    /// Contact rows and stat items carry explicit keys as well as the legacy
    /// icons and labels, so either dispatch finds them.
    pub fn skeleton() -> Self {
        Self {
            title: String::new(),
            meta_description: Some(String::new()),
            hero_logo: Some(String::new()),
            hero_tagline: Some(String::new()),
            hero_subtitle: Some(String::new()),
            contact_rows: vec![
                ContactRow::new(Some("email"), "fas fa-envelope", "Email", ""),
                ContactRow::new(Some("phone"), "fab fa-whatsapp", "WhatsApp", ""),
                ContactRow::new(Some("working_hours"), "fas fa-clock", "Horário", ""),
                ContactRow::new(Some("address"), "fas fa-map-marker-alt", "Localização", ""),
            ],
            stat_items: vec![
                StatItem::new(Some("projects"), "Projetos Entregues"),
                StatItem::new(Some("technologies"), "Tecnologias Dominadas"),
                StatItem::new(Some("customization_percent"), "% Personalizado"),
                StatItem::new(Some("response_time_hours"), "Tempo de Resposta (h)"),
            ],
            services: Some(Container::default()),
            style_vars: Vec::new(),
        }
    }

    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl RenderTarget for Page {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut String> {
        match slot {
            Slot::MetaDescription => self.meta_description.as_mut(),
            Slot::HeroLogo => self.hero_logo.as_mut(),
            Slot::HeroTagline => self.hero_tagline.as_mut(),
            Slot::HeroSubtitle => self.hero_subtitle.as_mut(),
        }
    }

    fn contact_rows_mut(&mut self) -> &mut [ContactRow] {
        &mut self.contact_rows
    }

    fn stat_items_mut(&mut self) -> &mut [StatItem] {
        &mut self.stat_items
    }

    fn services_container_mut(&mut self) -> Option<&mut Container> {
        self.services.as_mut()
    }

    fn set_style_var(&mut self, name: &str, value: &str) {
        match self.style_vars.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .style_vars
                .push((name.to_string(), value.to_string())),
        }
    }
}
