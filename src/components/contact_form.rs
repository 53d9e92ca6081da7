use leptos::prelude::*;

/// Minimal local@domain.tld shape: exactly one @, a dot somewhere in the
/// domain with non-empty labels either side, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Names of the fields that fail validation: required fields must be
/// non-empty after trimming, the email field must also parse.
pub fn invalid_fields(name: &str, email: &str, message: &str) -> Vec<&'static str> {
    let mut failed = Vec::new();
    if name.trim().is_empty() {
        failed.push("name");
    }
    let email = email.trim();
    if email.is_empty() || !is_valid_email(email) {
        failed.push("email");
    }
    if message.trim().is_empty() {
        failed.push("message");
    }
    failed
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<&'static str>::new());

    let has_error = move |field: &'static str| errors.get().contains(&field);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let failed = invalid_fields(&name.get(), &email.get(), &message.get());
        if !failed.is_empty() {
            // Invalid input cancels the submission outright.
            ev.prevent_default();
            set_errors.set(failed);
            if let Some(window) = web_sys::window() {
                let _ = window
                    .alert_with_message("Please complete the highlighted fields before sending.");
            }
        } else {
            set_errors.set(Vec::new());
        }
    };

    view! {
        <section id="contact" class="container p-4 mx-auto max-w-3xl">
            <h3 class="pb-2 mb-6 text-3xl font-bold text-gray-800 border-b-4 border-emerald-600 w-fit">
                "Contact Us"
            </h3>
            <form method="post" action="https://formsubmit.co/office@masjid-annoor.org.uk" on:submit=on_submit>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <input
                        type="text"
                        name="name"
                        placeholder="Your name"
                        class="w-full input input-bordered"
                        class:input-error=move || has_error("name")
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Your email"
                        class="w-full input input-bordered"
                        class:input-error=move || has_error("email")
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <textarea
                    name="message"
                    placeholder="Your message"
                    rows="5"
                    class="w-full mt-4 textarea textarea-bordered"
                    class:textarea-error=move || has_error("message")
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="mt-4 text-white btn btn-success">
                    "Send message"
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("office@masjid-annoor.org.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn required_fields_must_be_non_empty_after_trim() {
        assert_eq!(
            invalid_fields("  ", "a@b.co", "hello"),
            vec!["name"]
        );
        assert_eq!(
            invalid_fields("Ali", "a@b.co", "   "),
            vec!["message"]
        );
        assert!(invalid_fields("Ali", "a@b.co", "hello").is_empty());
    }

    #[test]
    fn bad_email_fails_even_when_present() {
        assert_eq!(invalid_fields("Ali", "not-an-email", "hi"), vec!["email"]);
    }
}
