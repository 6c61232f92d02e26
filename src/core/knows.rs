use crate::domain::model::TaskInfo;
use crate::domain::ports::{Task, TaskContext};
use crate::utils::error::Result;

pub const KNOWS_MESSAGE: &str = "\nNo, The Shadow Knows....";
pub const BANNER_RESOURCE: &str = "/shadowBanner.txt";

/// Prints the Shadow banner.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowsTask;

impl KnowsTask {
    pub const NAME: &'static str = "knows";
    pub const DESCRIPTION: &'static str = "Do you know who knows?";
    pub const GROUP: &'static str = "shadow";
}

impl Task for KnowsTask {
    fn info(&self) -> TaskInfo {
        TaskInfo::new(Self::NAME, Self::DESCRIPTION, Self::GROUP)
    }

    fn run(&self, ctx: &TaskContext<'_>) -> Result<()> {
        ctx.info(KNOWS_MESSAGE);
        let banner = ctx.resources.read_text(BANNER_RESOURCE)?;
        ctx.info(&banner);
        Ok(())
    }
}
