use std::str::FromStr;

use crate::ParseLocaleError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::PtBr => &PT_BR,
        }
    }
}

/// Accepts language tags like `en`, `en-US`, `pt`, `pt_BR` or a POSIX locale
/// such as `pt_BR.UTF-8`.
impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.split('.').next().unwrap_or(s).replace('_', "-");
        let lang = tag.split('-').next().unwrap_or("").to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "pt" => Ok(Locale::PtBr),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

/// Copy shown on the screen for one locale.
#[derive(Debug)]
pub struct Strings {
    pub screen_title: &'static str,
    pub add_hint: &'static str,
    pub add_button: &'static str,
    pub edit_button: &'static str,
    pub save_button: &'static str,
    pub cancel_button: &'static str,
    pub delete_button: &'static str,

    pub duplicate_title: &'static str,
    pub duplicate_message: &'static str,
    pub duplicate_ok: &'static str,

    pub remove_title: &'static str,
    pub remove_message: &'static str,
    pub remove_no: &'static str,
    pub remove_yes: &'static str,

    task_singular: &'static str,
    task_plural: &'static str,
    count_prefix: &'static str,
}

impl Strings {
    /// Header counter, e.g. "You have 3 tasks".
    pub fn task_count(&self, n: usize) -> String {
        let noun = if n == 1 {
            self.task_singular
        } else {
            self.task_plural
        };
        format!("{} {n} {noun}", self.count_prefix)
    }
}

pub static EN: Strings = Strings {
    screen_title: "to.do",
    add_hint: "Add a new to-do...",
    add_button: "+",
    edit_button: "Edit",
    save_button: "Save",
    cancel_button: "✕",
    delete_button: "Delete",

    duplicate_title: "Task already registered",
    duplicate_message: "You cannot register a task with the same name",
    duplicate_ok: "OK",

    remove_title: "Remove item",
    remove_message: "Are you sure you want to remove this item?",
    remove_no: "No",
    remove_yes: "Yes",

    task_singular: "task",
    task_plural: "tasks",
    count_prefix: "You have",
};

pub static PT_BR: Strings = Strings {
    screen_title: "to.do",
    add_hint: "Adicionar novo todo...",
    add_button: "+",
    edit_button: "Editar",
    save_button: "Salvar",
    cancel_button: "✕",
    delete_button: "Excluir",

    duplicate_title: "Task já cadastrada",
    duplicate_message: "Você não pode cadastrar uma task com o mesmo nome",
    duplicate_ok: "OK",

    remove_title: "Remover item",
    remove_message: "Tem certeza que você deseja remover esse item?",
    remove_no: "Não",
    remove_yes: "Sim",

    task_singular: "tarefa",
    task_plural: "tarefas",
    count_prefix: "Você tem",
};
