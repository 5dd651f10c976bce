//! Role-specific theme helpers so every screen picks up the accent of the
//! signed-in role without repeating class strings.

use crate::domain::UserRole;

pub fn btn_primary(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400",
        UserRole::OfficeStaff => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400",
        UserRole::DepotStaff => "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-white hover:bg-amber-400",
        UserRole::Gso => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400",
        UserRole::GsoStaff => "rounded-lg bg-teal-500 px-4 py-2 text-sm font-semibold text-white hover:bg-teal-400",
    }
}

pub fn btn_secondary(_role: UserRole) -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800"
}

pub fn input_class(_role: UserRole) -> &'static str {
    "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none"
}

pub fn label_class(_role: UserRole) -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn panel(_role: UserRole) -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn table_container(_role: UserRole) -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden"
}

pub fn table_header(_role: UserRole) -> &'static str {
    "border-b border-slate-800 bg-slate-900/60 text-left text-xs uppercase tracking-wide text-slate-500"
}

pub fn table_divider(_role: UserRole) -> &'static str {
    "divide-y divide-slate-800"
}

pub fn accent_text(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "text-indigo-300",
        UserRole::OfficeStaff => "text-sky-300",
        UserRole::DepotStaff => "text-amber-300",
        UserRole::Gso => "text-emerald-300",
        UserRole::GsoStaff => "text-teal-300",
    }
}

pub fn nav_active(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "flex w-full items-center rounded-lg bg-indigo-500/15 border border-indigo-500/60 px-4 py-2.5 text-sm font-semibold text-indigo-200",
        UserRole::OfficeStaff => "flex w-full items-center rounded-lg bg-sky-500/15 border border-sky-500/60 px-4 py-2.5 text-sm font-semibold text-sky-200",
        UserRole::DepotStaff => "flex w-full items-center rounded-lg bg-amber-500/15 border border-amber-500/60 px-4 py-2.5 text-sm font-semibold text-amber-200",
        UserRole::Gso => "flex w-full items-center rounded-lg bg-emerald-500/15 border border-emerald-500/60 px-4 py-2.5 text-sm font-semibold text-emerald-200",
        UserRole::GsoStaff => "flex w-full items-center rounded-lg bg-teal-500/15 border border-teal-500/60 px-4 py-2.5 text-sm font-semibold text-teal-200",
    }
}

pub fn nav_inactive(_role: UserRole) -> &'static str {
    "flex w-full items-center rounded-lg border border-transparent px-4 py-2.5 text-sm text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
}
