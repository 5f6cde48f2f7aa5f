use crate::field_errors::{field_error, FieldErrors};
use crate::format_helpers::initials;
use dioxus::prelude::*;
use shared_types::{AccountType, ManagedUser, NewUserForm, UserDirectory};
use shared_ui::{
    described, use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FormSelect, Input, PageHeader, StatTile,
};

/// Remove `id` from the directory. The confirmation is the same whether or
/// not the account was still listed.
fn remove_user(directory: &mut UserDirectory, id: &str) -> &'static str {
    match directory.delete_user(id) {
        Some(user) => tracing::info!(%id, name = %user.name, "user deleted"),
        None => tracing::debug!(%id, "delete requested for unknown user"),
    }
    "User deleted successfully"
}

/// Manage teacher and student accounts.
#[component]
pub fn AdminDashboard() -> Element {
    let toast = use_toast();
    let mut directory = use_signal(UserDirectory::seeded);
    let mut form = use_signal(NewUserForm::default);
    let mut show_form = use_signal(|| false);
    let mut field_errors = use_signal(FieldErrors::new);

    let stats = directory.read().stats();
    let teachers: Vec<ManagedUser> = directory.read().teachers().cloned().collect();
    let students: Vec<ManagedUser> = directory.read().students().cloned().collect();

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = form();
        match directory.write().add_user(&submitted, chrono::Utc::now()) {
            Ok(user) => {
                tracing::info!(id = %user.id, kind = user.kind.account_type().as_str(), "user added");
                toast.success(
                    "Success".to_string(),
                    described(format!("{} added successfully", user.kind.account_type().label())),
                );
                form.set(NewUserForm::default());
                field_errors.set(FieldErrors::new());
                show_form.set(false);
            }
            Err(e) => {
                tracing::debug!(error = %e, "add user rejected");
                toast.error("Error".to_string(), described(e.message));
                field_errors.set(e.field_errors);
            }
        }
    };

    let handle_delete = move |id: String| {
        let message = remove_user(&mut directory.write(), &id);
        toast.success("Success".to_string(), described(message));
    };

    let account_type = form.read().account_type;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                title: "Admin Dashboard",
                subtitle: "Manage teachers, students, and system settings",
                actions: rsx! {
                    Button {
                        onclick: move |_: MouseEvent| show_form.toggle(),
                        if show_form() { "Close" } else { "Add New User" }
                    }
                },
            }

            div { class: "stat-row",
                StatTile { label: "Total Users", value: stats.total.to_string() }
                StatTile { label: "Total Teachers", value: stats.teachers.to_string() }
                StatTile { label: "Total Students", value: stats.students.to_string() }
            }

            if show_form() {
                Card { class: "add-user-panel",
                    CardHeader {
                        CardTitle { "Add New User" }
                        CardDescription { "Name and email are required" }
                    }
                    CardContent {
                        form { class: "dashboard-form", onsubmit: handle_add,
                            Input {
                                id: "name",
                                label: "Name",
                                placeholder: "Enter full name",
                                value: form.read().name.clone(),
                                error: field_error(&field_errors.read(), "name"),
                                on_input: move |e: FormEvent| form.write().name = e.value(),
                            }
                            Input {
                                id: "email",
                                label: "Email",
                                input_type: "email",
                                placeholder: "Enter email address",
                                value: form.read().email.clone(),
                                error: field_error(&field_errors.read(), "email"),
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                            FormSelect {
                                id: "type",
                                label: "User Type",
                                value: account_type.as_str(),
                                onchange: move |e: FormEvent| {
                                    if let Some(kind) = AccountType::parse(&e.value()) {
                                        form.write().account_type = kind;
                                    }
                                },
                                option { value: "student", "Student" }
                                option { value: "teacher", "Teacher" }
                            }
                            match account_type {
                                AccountType::Teacher => rsx! {
                                    Input {
                                        id: "department",
                                        label: "Department",
                                        placeholder: "Enter department",
                                        value: form.read().department.clone(),
                                        on_input: move |e: FormEvent| form.write().department = e.value(),
                                    }
                                },
                                AccountType::Student => rsx! {
                                    Input {
                                        id: "studentId",
                                        label: "Student ID",
                                        placeholder: "Enter student ID",
                                        value: form.read().student_id.clone(),
                                        on_input: move |e: FormEvent| form.write().student_id = e.value(),
                                    }
                                },
                            }
                            Button { button_type: "submit", full_width: true, "Add User" }
                        }
                    }
                }
            }

            UserSection {
                title: "Teachers",
                description: "Manage teacher accounts and permissions",
                users: teachers,
                on_delete: handle_delete,
            }
            UserSection {
                title: "Students",
                description: "Manage student accounts and enrollment",
                users: students,
                on_delete: handle_delete,
            }
        }
    }
}

#[component]
fn UserSection(
    title: String,
    description: String,
    users: Vec<ManagedUser>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        Card { class: "dashboard-section",
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
            CardContent {
                if users.is_empty() {
                    p { class: "dashboard-empty", "No {title.to_lowercase()} yet" }
                }
                ul { class: "dashboard-list",
                    for user in users.iter() {
                        UserRow { key: "{user.id}", user: user.clone(), on_delete }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: ManagedUser, on_delete: EventHandler<String>) -> Element {
    let detail = match (user.is_teacher(), user.kind.detail()) {
        (_, None) => String::new(),
        (true, Some(department)) => department.to_string(),
        (false, Some(student_id)) => format!("ID: {student_id}"),
    };
    let id = user.id.clone();

    rsx! {
        li { class: "dashboard-row",
            div { class: "dashboard-row-main",
                span { class: "avatar", "{initials(&user.name)}" }
                div {
                    h3 { class: "dashboard-row-title", "{user.name}" }
                    p { class: "dashboard-row-sub", "{user.email}" }
                    if !detail.is_empty() {
                        p { class: "dashboard-row-meta", "{detail}" }
                    }
                }
            }
            div { class: "dashboard-row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    title: "Edit user",
                    disabled: true,
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    size: ButtonSize::Small,
                    title: "Delete user",
                    onclick: move |_: MouseEvent| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn delete_confirms_even_when_user_is_gone() {
        let mut directory = UserDirectory::seeded();
        let before = directory.stats().total;

        assert_eq!(remove_user(&mut directory, "2"), "User deleted successfully");
        assert_eq!(directory.stats().total, before - 1);

        assert_eq!(remove_user(&mut directory, "2"), "User deleted successfully");
        assert_eq!(directory.stats().total, before - 1);
    }
}
