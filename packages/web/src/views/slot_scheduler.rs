//! Public booking page for a calendar link. Reachable as `/dashboard/slot/:id` or
//! `/dashboard/slot?id=...`, without signing in.

use api::calendar::{self, BookingForm, DaySlots, ScheduledMeeting};
use api::{Notice, Notify};
use dioxus::prelude::*;
use ui::icons::{FaArrowUpRightFromSquare, FaCalendarDays, FaCircleCheck, FaClock};
use ui::{use_backend, use_notices, Icon, LoadingSpinner};

#[component]
pub fn SlotScheduler(id: String) -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut date = use_signal(String::new);
    let mut slot = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut booking = use_signal(|| false);
    let mut booked = use_signal(|| Option::<ScheduledMeeting>::None);

    let slots = use_resource({
        let backend = backend.clone();
        let id = id.clone();
        use_reactive!(|(id,)| {
            let backend = backend.clone();
            async move {
                if id.trim().is_empty() {
                    return Vec::new();
                }
                match calendar::load_slots(&backend, &id).await {
                    Ok(days) => days,
                    Err(e) => {
                        tracing::error!("Error fetching slots for {id}: {e}");
                        notices.notify(Notice::error("Error", "Failed to fetch available slots"));
                        Vec::new()
                    }
                }
            }
        })
    });

    let confirm = {
        let id = id.clone();
        move |_| {
            let backend = backend.clone();
            let id = id.clone();
            let form = BookingForm {
                date: date(),
                slot: slot(),
                title: title(),
                description: description(),
            };
            spawn(async move {
                booking.set(true);
                let result = calendar::book_meeting(&backend, &chrono::Local, &id, &form).await;
                booking.set(false);
                match result {
                    Ok(meeting) => {
                        notices.notify(Notice::success("Success", "Meeting scheduled successfully!"));
                        booked.set(Some(meeting));
                    }
                    Err(e) if e.is_validation() => {
                        notices.notify(Notice::error("Error", e.to_string()));
                    }
                    Err(e) => {
                        tracing::error!("Error scheduling meeting: {e}");
                        notices.notify(Notice::error("Error", "Failed to schedule meeting. Please try again."));
                    }
                }
            });
        }
    };

    let Some(days) = slots() else {
        return rsx! { LoadingSpinner {} };
    };
    if booking() {
        return rsx! { LoadingSpinner { message: "Booking your meeting..." } };
    }

    let chosen: Option<DaySlots> = days.iter().find(|d| d.date == date()).cloned();

    rsx! {
        div {
            class: "page page-public",
            div {
                class: "page-hero",
                h1 { "Schedule a Meeting" }
                p { class: "muted", "Select your preferred date and time slot" }
            }

            if id.trim().is_empty() {
                div { class: "card empty", p { "No booking link given." } }
            }

            div {
                class: "slot-grid",
                div {
                    class: "card",
                    h3 { Icon { icon: FaCalendarDays, width: 14, height: 14 } " Available Dates" }
                    if days.is_empty() {
                        p { class: "muted small", "No free slots right now." }
                    }
                    div {
                        class: "date-grid",
                        for day in days.iter() {
                            button {
                                key: "{day.date}",
                                class: if date() == day.date { "btn btn-primary date-button" } else { "btn btn-outline date-button" },
                                onclick: {
                                    let value = day.date.clone();
                                    move |_| {
                                        date.set(value.clone());
                                        slot.set(String::new());
                                    }
                                },
                                span { class: "small muted", "{day.weekday_label()}" }
                                span { class: "strong", "{day.day_number()}" }
                                span { class: "badge", "{day.slots.len()} slots" }
                            }
                        }
                    }
                }

                div {
                    class: "card",
                    h3 { Icon { icon: FaClock, width: 14, height: 14 } " Available Times" }
                    if let Some(day) = chosen {
                        p { class: "small muted", "{day.full_label()}" }
                        div {
                            class: "time-grid",
                            for time in day.slots.iter() {
                                button {
                                    key: "{time}",
                                    class: if slot() == *time { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                                    onclick: {
                                        let value = time.clone();
                                        move |_| slot.set(value.clone())
                                    },
                                    "{time}"
                                }
                            }
                        }
                    } else {
                        p { class: "muted small", "Please select a date to view available time slots" }
                    }
                }
            }

            if !date().is_empty() && !slot().is_empty() && booked.read().is_none() {
                div {
                    class: "card",
                    h3 { "Meeting Details" }
                    label {
                        class: "field",
                        span { "Meeting Title *" }
                        input {
                            r#type: "text",
                            placeholder: "Enter meeting title",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    label {
                        class: "field",
                        span { "Description" }
                        textarea {
                            rows: 3,
                            placeholder: "Enter meeting description",
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        onclick: confirm,
                        "Confirm Booking ({slot} on {date})"
                    }
                }
            }

            if let Some(meeting) = booked() {
                div {
                    class: "card booked",
                    h3 { Icon { icon: FaCircleCheck, width: 16, height: 16 } " Meeting Scheduled!" }
                    p { "Your meeting \"{meeting.summary}\" has been added to your calendar." }
                    p { class: "small", strong { "Event ID: " } "{meeting.id}" }
                    p { class: "small", strong { "Start: " } "{meeting.start_label()}" }
                    p { class: "small", strong { "End: " } "{meeting.end_label()}" }
                    if !meeting.html_link.is_empty() {
                        a {
                            class: "btn btn-outline btn-sm",
                            href: "{meeting.html_link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                            " View in Calendar"
                        }
                    }
                }
            }
        }
    }
}
