// Record descriptions look like
// AF495760.1 Lythrum salicaria chloroplast ribulose 1,5-bisphosphate carboxylase/oxygenase large subunit-like mRNA, partial sequence
// the first token is the accession, the next two tokens are the OTU

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLabel {
    pub accession: String,
    pub otu: String,
}

pub fn parse_description(description: &str) -> Option<RecordLabel> {
    let mut tokens = description.split_whitespace();
    let accession = tokens.next()?;
    let genus = tokens.next()?;
    let species = tokens.next()?;
    Some(RecordLabel {
        accession: accession.to_string(),
        otu: format!("{genus} {species}"),
    })
}
