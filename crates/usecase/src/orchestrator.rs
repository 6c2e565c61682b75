use tracing::{debug, info, warn};
use version_stamper_domain::{MetadataRecord, Placeholder, Substituter, Template};
use version_stamper_ports::filesystem::{ContentSink, ContentSource, StampPlan};
use version_stamper_shared_kernel::{ApplicationError, Result, VersionStamperError};

use crate::dto::StampOutcome;

pub struct StampVersion<'a> {
    source: &'a dyn ContentSource,
    sink: &'a dyn ContentSink,
}

impl<'a> StampVersion<'a> {
    pub fn new(source: &'a dyn ContentSource, sink: &'a dyn ContentSink) -> Self {
        Self { source, sink }
    }

    pub fn run(&self, plan: &StampPlan) -> Result<StampOutcome> {
        info!("Metadata file: {}", plan.metadata.display());
        info!("Template file: {}", plan.template.display());
        info!("Output file: {}", plan.output.display());

        let substituter = Substituter::new()?;

        let template = self
            .source
            .read_bytes(&plan.template)
            .map(Template::new)
            .map_err(stage("read template"))?;

        let lines = self
            .source
            .read_lines(&plan.metadata, MetadataRecord::FIELD_COUNT)
            .map_err(stage("read metadata"))?;
        let lines_read = lines.len().min(MetadataRecord::FIELD_COUNT);
        if lines_read < MetadataRecord::FIELD_COUNT {
            warn!(
                "Metadata file has {lines_read} of {} lines; missing fields stamp as empty",
                MetadataRecord::FIELD_COUNT
            );
        }
        let record = MetadataRecord::from_lines(lines);
        for (placeholder, value) in record.fields() {
            info!("{placeholder} = {}", String::from_utf8_lossy(value));
        }

        let document = substituter.apply(&template, &record);
        for placeholder in Placeholder::ACTIVE {
            debug!("{placeholder}: {} replacement(s)", document.count_for(placeholder));
        }
        if template.occurrences(Placeholder::Now) > 0 {
            debug!("{} is deprecated and left as-is", Placeholder::Now);
        }

        self.sink.write_bytes(&plan.output, document.as_bytes()).map_err(stage("write output"))?;
        info!("Stamped {} placeholder(s) into {}", document.total_substitutions(), plan.output.display());

        Ok(StampOutcome { record, lines_read, document })
    }
}

fn stage(stage: &'static str) -> impl FnOnce(VersionStamperError) -> VersionStamperError {
    move |source| ApplicationError::StampFailed { stage, source: Box::new(source) }.into()
}
