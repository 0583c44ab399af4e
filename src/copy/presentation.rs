use crate::content::{ColorTag, Icon};

pub const IDLE_HINT: &str = "点击复制";
pub const COPIED_HINT: &str = "已复制!";

/// Everything that differs between an idle and a just-copied pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyPresentation {
    pub container: &'static str,
    /// Entry-colored hover border; empty once copied.
    pub accent: &'static str,
    pub badge: &'static str,
    pub indicator: Icon,
    pub indicator_class: &'static str,
    pub hint: &'static str,
    pub hint_class: &'static str,
}

pub fn present(color: ColorTag, active: bool) -> CopyPresentation {
    if active {
        CopyPresentation {
            container: "bg-emerald-50 border-emerald-200 text-emerald-700",
            accent: "",
            badge: "bg-emerald-100",
            indicator: Icon::Check,
            indicator_class: "text-emerald-600",
            hint: COPIED_HINT,
            hint_class: "opacity-100",
        }
    } else {
        CopyPresentation {
            container: "bg-white border-slate-200 text-slate-600 hover:shadow-md",
            accent: color.hover_border(),
            badge: color.badge(),
            indicator: Icon::Copy,
            indicator_class: "",
            hint: IDLE_HINT,
            hint_class: "opacity-0 group-hover:opacity-100",
        }
    }
}
