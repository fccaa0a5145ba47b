use api::Comment;
use dioxus::prelude::*;
use ui::format::comment_timestamp;
use ui::icons::{FaFloppyDisk, FaPen, FaTrash, FaXmark};
use ui::Icon;

/// One comment with its inline editor.
///
/// The parent owns the edit state: `editing` says whether this card shows
/// the editor, `draft` is the text being edited and `saving` disables Save
/// while the update is in flight.
#[component]
pub fn CommentCard(
    comment: Comment,
    #[props(default)] show_post_title: bool,
    can_edit: bool,
    can_delete: bool,
    editing: bool,
    draft: String,
    #[props(default)] saving: bool,
    on_edit: EventHandler<()>,
    on_draft: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let created = comment_timestamp(&comment.created_at);
    let updated = comment_timestamp(&comment.updated_at);

    rsx! {
        article {
            class: "comment-card",
            if show_post_title {
                h3 { class: "comment-post", "{comment.post_title()}" }
            }
            div {
                class: "comment-meta",
                span { class: "comment-author", "{comment.author.name}" }
                span { "{created}" }
                if comment.is_edited() {
                    span { class: "comment-edited", "(edited {updated})" }
                }
            }
            if editing {
                textarea {
                    class: "comment-editor",
                    maxlength: 1000,
                    value: "{draft}",
                    oninput: move |evt| on_draft.call(evt.value()),
                }
                div {
                    class: "comment-actions",
                    button {
                        class: "btn btn-dark",
                        disabled: saving,
                        onclick: move |_| on_save.call(()),
                        Icon { width: 14, height: 14, icon: FaFloppyDisk }
                        span { "Save" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        Icon { width: 14, height: 14, icon: FaXmark }
                        span { "Cancel" }
                    }
                }
            } else {
                p { class: "comment-text", "{comment.text}" }
                if can_edit || can_delete {
                    div {
                        class: "comment-actions",
                        if can_edit {
                            button {
                                class: "icon-button",
                                title: "Edit comment",
                                onclick: move |_| on_edit.call(()),
                                Icon { width: 14, height: 14, icon: FaPen }
                            }
                        }
                        if can_delete {
                            button {
                                class: "icon-button",
                                title: "Delete comment",
                                onclick: move |_| on_delete.call(()),
                                Icon { width: 14, height: 14, icon: FaTrash }
                            }
                        }
                    }
                }
            }
        }
    }
}
