/// Log warning and return 400 status to client
#[macro_export]
macro_rules! log_n_reject {
    ($lit:literal $(, $($tt:tt)* )?) => {{
        tracing::warn!($($($tt)*,)? $lit);
        return Err(actix_web::error::ErrorBadRequest($lit));
    }};
}
