use crate::{Icon, IconNode};

/// The `currency` icon.
pub const CURRENCY: Icon = Icon {
    name: "currency",
    nodes: &[
        IconNode::Circle { cx: 12.0, cy: 12.0, r: 8.0 },
        IconNode::Line { x1: 3.0, y1: 3.0, x2: 6.0, y2: 6.0 },
        IconNode::Line { x1: 21.0, y1: 3.0, x2: 18.0, y2: 6.0 },
        IconNode::Line { x1: 3.0, y1: 21.0, x2: 6.0, y2: 18.0 },
        IconNode::Line { x1: 21.0, y1: 21.0, x2: 18.0, y2: 18.0 },
    ],
};

/// The `check` icon.
pub const CHECK: Icon = Icon {
    name: "check",
    nodes: &[IconNode::Path { d: "M20 6 9 17l-5-5" }],
};

/// The `x` icon.
pub const X: Icon = Icon {
    name: "x",
    nodes: &[
        IconNode::Path { d: "M18 6 6 18" },
        IconNode::Path { d: "m6 6 12 12" },
    ],
};

/// The `chevron-down` icon.
pub const CHEVRON_DOWN: Icon = Icon {
    name: "chevron-down",
    nodes: &[IconNode::Path { d: "m6 9 6 6 6-6" }],
};

/// The `chevron-up` icon.
pub const CHEVRON_UP: Icon = Icon {
    name: "chevron-up",
    nodes: &[IconNode::Path { d: "m18 15-6-6-6 6" }],
};

/// The `plus` icon.
pub const PLUS: Icon = Icon {
    name: "plus",
    nodes: &[
        IconNode::Path { d: "M5 12h14" },
        IconNode::Path { d: "M12 5v14" },
    ],
};

/// Every built-in icon.
pub const ALL: &[Icon] = &[CURRENCY, CHECK, X, CHEVRON_DOWN, CHEVRON_UP, PLUS];

/// Look up a built-in icon by its kebab-case name.
pub fn icon_by_name(name: &str) -> Option<Icon> {
    ALL.iter().copied().find(|icon| icon.name == name)
}
