//! Transient toast-style notifications.
//!
//! Systems push messages into the [`Notifications`] resource; an overlay
//! renders them stacked in the top-right corner until they expire.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// How long a notification stays on screen, in seconds.
const NOTIFICATION_LIFETIME: f32 = 4.0;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One on-screen notification.
#[derive(Clone, Debug)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    /// Seconds until removal.
    pub remaining: f32,
}

/// Queue of active notifications, newest last.
#[derive(Resource, Default)]
pub struct Notifications {
    active: Vec<Notification>,
}

impl Notifications {
    pub fn push_success(&mut self, text: impl Into<String>) {
        self.push(text, NotificationKind::Success);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(text, NotificationKind::Error);
    }

    fn push(&mut self, text: impl Into<String>, kind: NotificationKind) {
        self.active.push(Notification {
            text: text.into(),
            kind,
            remaining: NOTIFICATION_LIFETIME,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Count down and drop expired notifications.
pub fn expire_notifications(time: Res<Time>, mut notifications: ResMut<Notifications>) {
    let dt = time.delta_secs();
    for n in notifications.active.iter_mut() {
        n.remaining -= dt;
    }
    notifications.active.retain(|n| n.remaining > 0.0);
}

/// Render active notifications in the top-right corner.
pub fn notification_overlay(mut contexts: EguiContexts, notifications: Res<Notifications>) {
    if notifications.is_empty() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            for notification in notifications.iter() {
                let (bg, border) = match notification.kind {
                    NotificationKind::Success => (
                        egui::Color32::from_rgba_premultiplied(30, 60, 40, 240),
                        egui::Color32::from_rgb(85, 176, 85),
                    ),
                    NotificationKind::Error => (
                        egui::Color32::from_rgba_premultiplied(80, 30, 30, 240),
                        egui::Color32::from_rgb(224, 85, 85),
                    ),
                };

                // Fade out over the last second
                let alpha = notification.remaining.min(1.0);

                egui::Frame::NONE
                    .fill(bg)
                    .stroke(egui::Stroke::new(1.5, border))
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.set_opacity(alpha);
                        ui.label(egui::RichText::new(&notification.text).strong());
                    });
                ui.add_space(6.0);
            }
        });
}
