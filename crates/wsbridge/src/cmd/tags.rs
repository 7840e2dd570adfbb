use crate::cmd::TagsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_tags, OutputFormat};

pub fn run(_args: TagsArgs, format: OutputFormat) -> CliResult<i32> {
    print_tags(format);
    Ok(SUCCESS)
}
