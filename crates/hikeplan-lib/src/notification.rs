//! Plaintext rendering of the hike plan email.
//!
//! Rendering is pure: the same context always produces the same bytes.

use crate::model::{EmailMessage, NotificationContext, UserInfo};

pub const SUBJECT: &str = "Hike Planner App - Your new hiking plan";

/// Render the message body for `first_name`.
///
/// Weather fields render as empty strings when the forecast window did not
/// contain the start date.
pub fn render_body(context: &NotificationContext, first_name: &str) -> String {
    let date = context.request.start_date.format("%Y-%m-%d").to_string();
    let weather = context.forecast.weather();
    let trail = &context.trail;

    format!(
        "Hi {first_name},\n\n\
         Here's some info on the hike you're planning:\n\n\
         Hike Start Date: \t\t\t\t\t{date}\n\
         Name of the trail: \t\t\t\t\t{name}\n\
         Link to trail maps: \t\t\t\t\t{url}\n\
         Trail weather on {date}: \t\t\t{description}\n\
         Trail Avg temp on {date}: \t\t\t{avg}\n\
         Trail Low temp on {date}: \t\t\t{low}\n\
         Trail High temp on {date}: \t\t\t{high}\n\n\
         Happy Hiking!",
        name = trail.name,
        url = trail.url,
        description = weather.description,
        avg = weather.avg_temp,
        low = weather.low_temp,
        high = weather.high_temp,
    )
}

/// Compose the full email addressed to `user`.
pub fn compose(context: &NotificationContext, user: &UserInfo) -> EmailMessage {
    EmailMessage {
        to: user.email.clone(),
        subject: SUBJECT.to_string(),
        body: render_body(context, &user.first_name),
    }
}
