use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::users::login_user,
        crate::api::users::manage_users,
        crate::api::users::update_role_admin,
        crate::api::users::update_role_instructor,
        crate::api::users::delete_user,
        crate::api::users::home_instructors,
        crate::api::users::all_instructors,
        crate::api::courses::home_courses,
        crate::api::courses::all_courses,
        crate::api::courses::add_course,
        crate::api::courses::my_courses,
        crate::api::courses::update_course_data,
        crate::api::courses::approve_course,
        crate::api::courses::deny_course,
        crate::api::courses::course_feedback,
        crate::api::courses::delete_course,
        crate::api::selections::add_selected_course,
        crate::api::selections::selected_courses_by_email,
        crate::api::selections::delete_selected_course,
        crate::api::payments::create_payment_intent,
        crate::api::payments::payment_info,
        crate::api::payments::available_seat_decrement,
        crate::api::payments::enrolled_courses,
        crate::api::payments::payment_history,
        crate::api::messages::create_message,
        crate::api::messages::mark_message_seen,
        crate::api::messages::delete_message,
        crate::api::dashboard::admin_stats,
        crate::api::dashboard::instructor_stats,
        crate::api::dashboard::student_stats
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::Course,
            crate::models::SelectedCourse,
            crate::models::Payment,
            crate::models::ContactMessage,
            crate::models::Role,
            crate::models::CourseStatus,
            crate::models::ViewStatus,
            crate::api::courses::AddCourseRequest,
            crate::api::courses::UpdateCourseRequest,
            crate::api::courses::FeedbackRequest,
            crate::api::payments::CreateIntentRequest,
            crate::api::payments::SeatDecrementRequest,
            crate::api::dashboard::AdminStats,
            crate::api::dashboard::InstructorStats,
            crate::api::dashboard::StudentStats
        )
    ),
    tags(
        (name = "users", description = "Login and user management"),
        (name = "courses", description = "Course catalog and moderation"),
        (name = "selections", description = "Student checkout selections"),
        (name = "payments", description = "Payment intents and records"),
        (name = "messages", description = "Contact form"),
        (name = "dashboard", description = "Role dashboards")
    )
)]
pub struct ApiDoc;
