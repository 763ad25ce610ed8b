pub(crate) mod logging;
pub(crate) mod timezone;

pub(crate) use logging::init_tracing;
pub(crate) use timezone::Timezone;
