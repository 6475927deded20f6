//! End-to-end conversion of one statement.

use tracing::{debug, info, warn};

use super::assembler::{Assembler, Block};
use super::classifier::{Classification, Classifier, RunningBalance};
use super::fields::{FieldParser, ParsedFields};
use super::rules::{StatementYear, format_money};
use crate::error::Result;
use crate::formats::StatementFormat;
use crate::models::config::SegmenterConfig;
use crate::models::keywords::KeywordConfig;
use crate::models::row::{Conversion, ConversionStats, ConvertedRow, Direction, TransactionRow};
use crate::segment::{TextFragment, reconstruct_lines, split_lines};

/// Warning attached to a conversion that produced no rows.
pub const NO_TRANSACTIONS: &str = "no transactions found";

/// Trait for statement parsing.
pub trait StatementParser {
    /// Parse statement text with an optional four-digit year.
    fn parse(&self, text: &str, year: Option<&str>) -> Result<Conversion>;
}

/// Converts statement text of one format into transaction rows.
///
/// All per-run state lives inside a single call, so one converter can be
/// reused for any number of statements.
#[derive(Debug, Clone)]
pub struct StatementConverter {
    format: &'static StatementFormat,
    keywords: KeywordConfig,
    segmenter: SegmenterConfig,
}

impl StatementConverter {
    /// Create a converter with the built-in keyword lists.
    pub fn new(format: &'static StatementFormat) -> Self {
        Self {
            format,
            keywords: KeywordConfig::default(),
            segmenter: SegmenterConfig::default(),
        }
    }

    /// Create a converter for a registered format id.
    pub fn for_format_id(id: &str) -> Result<Self> {
        Ok(Self::new(StatementFormat::by_id(id)?))
    }

    /// Set the keyword lists.
    pub fn with_keywords(mut self, keywords: KeywordConfig) -> Self {
        self.keywords = keywords.normalized();
        self
    }

    /// Set the fragment line reconstruction parameters.
    pub fn with_segmenter_config(mut self, config: SegmenterConfig) -> Self {
        self.segmenter = config;
        self
    }

    /// Replace the keyword lists in place.
    pub fn set_keywords(&mut self, keywords: KeywordConfig) {
        self.keywords = keywords.normalized();
    }

    pub fn format(&self) -> &'static StatementFormat {
        self.format
    }

    pub fn keywords(&self) -> &KeywordConfig {
        &self.keywords
    }

    /// Convert pasted or extracted statement text.
    pub fn convert(&self, text: &str, year: Option<&str>) -> Result<Conversion> {
        self.convert_lines(&split_lines(text), year)
    }

    /// Convert per-page text, pages in order.
    pub fn convert_pages<S: AsRef<str>>(&self, pages: &[S], year: Option<&str>) -> Result<Conversion> {
        let lines: Vec<String> = pages
            .iter()
            .flat_map(|page| split_lines(page.as_ref()))
            .collect();
        self.convert_lines(&lines, year)
    }

    /// Convert a PDF statement, reading at most `max_pages` pages (0 = all).
    #[cfg(feature = "pdf")]
    pub fn convert_pdf(&self, data: &[u8], max_pages: usize, year: Option<&str>) -> Result<Conversion> {
        let pages = crate::pdf::PdfExtractor::pages_from_bytes(data, max_pages)?;
        let texts: Vec<&str> = pages.iter().map(|p| p.text.as_str()).collect();
        self.convert_pages(&texts, year)
    }

    /// Convert positioned text fragments, one vector per page.
    pub fn convert_fragments(
        &self,
        pages: &[Vec<TextFragment>],
        year: Option<&str>,
    ) -> Result<Conversion> {
        let lines: Vec<String> = pages
            .iter()
            .flat_map(|page| reconstruct_lines(page, &self.segmenter))
            .collect();
        self.convert_lines(&lines, year)
    }

    /// Convert already segmented logical lines.
    pub fn convert_lines<S: AsRef<str>>(&self, lines: &[S], year: Option<&str>) -> Result<Conversion> {
        let year = StatementYear::parse(year)?;
        let format = self.format;

        info!("Converting {} lines as {}", lines.len(), format.id);

        let blocks = Assembler::new(format).assemble(lines);
        let parser = FieldParser::new(format, year.as_ref());
        let classifier = Classifier::new(format, &self.keywords);

        let mut stats = ConversionStats {
            lines: lines.len(),
            ..Default::default()
        };
        let mut balance = RunningBalance::new();
        let mut rows = Vec::new();

        for block in blocks {
            match block {
                Block::Marker(marker) => {
                    stats.balance_markers += 1;
                    debug!("Balance marker {:?}: {:?}", marker.kind, marker.balance);
                    if let Some(value) = marker.balance {
                        balance.seed(value);
                    }
                }
                Block::Transaction(block) => {
                    stats.blocks += 1;
                    let fields = match parser.parse(&block) {
                        Ok(fields) => fields,
                        Err(reason) => {
                            stats.dropped_blocks += 1;
                            debug!("Dropped block ({}): {}", reason, block.text());
                            continue;
                        }
                    };

                    let verdict = classifier.classify(&fields, balance.value());
                    balance.advance(&fields, verdict.direction, format.implied_balance);
                    rows.push(build_row(fields, verdict));
                }
            }
        }

        let mut warnings = Vec::new();
        if rows.is_empty() {
            warn!("No transactions found in {} lines", lines.len());
            warnings.push(NO_TRANSACTIONS.to_string());
        }

        info!(
            "Converted {} rows ({} blocks, {} dropped)",
            rows.len(),
            stats.blocks,
            stats.dropped_blocks
        );

        Ok(Conversion {
            format_id: format.id.to_string(),
            rows,
            stats,
            warnings,
        })
    }
}

impl StatementParser for StatementConverter {
    fn parse(&self, text: &str, year: Option<&str>) -> Result<Conversion> {
        self.convert(text, year)
    }
}

fn build_row(fields: ParsedFields, verdict: Classification) -> ConvertedRow {
    let amount = format_money(fields.amount.amount);
    let (debit, credit) = match verdict.direction {
        Direction::Debit => (amount, String::new()),
        Direction::Credit => (String::new(), amount),
    };

    ConvertedRow {
        row: TransactionRow {
            date: fields.date,
            description: fields.description,
            debit,
            credit,
            balance: fields.balance.map(format_money).unwrap_or_default(),
        },
        path: verdict.path,
        sort_date: fields.sort_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StmtxError;
    use crate::models::row::ClassificationPath;

    fn converter(id: &str) -> StatementConverter {
        StatementConverter::for_format_id(id).unwrap()
    }

    #[test]
    fn test_rbc_balance_forward() {
        let text = "Jan 02 Balance forward 500.00\nJan 05 Payment received 100.00 600.00\n";
        let conversion = converter("rbc-account").convert(text, None).unwrap();

        assert_eq!(conversion.rows.len(), 1);
        assert_eq!(
            conversion.rows[0].row.cells(),
            ["Jan 05", "Payment received", "", "100.00", "600.00"].map(String::from)
        );
        assert_eq!(conversion.rows[0].path, ClassificationPath::Reconciled);
        assert_eq!(conversion.stats.balance_markers, 1);
    }

    #[test]
    fn test_empty_input_warns() {
        let conversion = converter("td-card").convert("", None).unwrap();
        assert!(conversion.is_empty());
        assert_eq!(conversion.warnings, vec![NO_TRANSACTIONS.to_string()]);
    }

    #[test]
    fn test_invalid_year() {
        let result = converter("td-card").convert("Jan 05 Jan 06 COFFEE 4.50", Some("24"));
        assert!(matches!(result, Err(StmtxError::InvalidYear(_))));
    }

    #[test]
    fn test_blank_year_is_absent() {
        let conversion = converter("td-card")
            .convert("Jan 05 Jan 06 COFFEE 4.50", Some(""))
            .unwrap();
        assert_eq!(conversion.rows[0].row.date, "Jan 05");
    }

    #[test]
    fn test_dropped_blocks_counted() {
        let text = "Jan 05 Jan 06 COFFEE 4.50\nThank you for your business\nJan 07 Jan 08 NOTE ONLY";
        let conversion = converter("td-card").convert(text, None).unwrap();
        assert_eq!(conversion.rows.len(), 1);
        assert_eq!(conversion.stats.dropped_blocks, 2);
    }

    #[test]
    fn test_custom_keywords() {
        let keywords = KeywordConfig::new(vec!["vendor"], Vec::<String>::new());
        let conversion = converter("td-card")
            .with_keywords(KeywordConfig::new(Vec::<String>::new(), vec!["misc vendor"]))
            .convert("Jan 05 Jan 06 MISC VENDOR 25.00", None)
            .unwrap();
        assert_eq!(conversion.rows[0].row.credit, "25.00");

        let conversion = converter("td-card")
            .with_keywords(keywords)
            .convert("Jan 05 Jan 06 MISC VENDOR 25.00", None)
            .unwrap();
        assert_eq!(conversion.rows[0].row.debit, "25.00");
        assert_eq!(conversion.rows[0].path, ClassificationPath::ConfiguredKeyword);
    }

    #[test]
    fn test_convert_fragments() {
        let pages = vec![vec![
            TextFragment::new("Jul 01 Jul 02", 10.0, 700.0, 60.0),
            TextFragment::new("COFFEE SHOP", 100.0, 700.0, 55.0),
            TextFragment::new("4.50", 300.0, 700.0, 20.0),
        ]];
        let conversion = converter("amex-card").convert_fragments(&pages, Some("2024")).unwrap();
        assert_eq!(
            conversion.rows[0].row.cells(),
            ["Jul 01 2024", "COFFEE SHOP", "4.50", "", ""].map(String::from)
        );
    }

    #[test]
    fn test_fragment_pages_keep_page_order() {
        // The second page's fragments sit higher on their page than the
        // first page's tail; pages must still be read in order.
        let pages = vec![
            vec![
                TextFragment::new("Opening balance 500.00", 10.0, 140.0, 110.0),
                TextFragment::new("Jan 05 SEND E-TFR", 10.0, 100.0, 85.0),
                TextFragment::new("JOHN SMITH", 10.0, 80.0, 50.0),
            ],
            vec![
                TextFragment::new("50.00", 300.0, 750.0, 25.0),
                TextFragment::new("450.00", 380.0, 750.0, 30.0),
                TextFragment::new("Jan 06 PAYROLL", 10.0, 730.0, 70.0),
                TextFragment::new("900.00", 300.0, 730.0, 30.0),
                TextFragment::new("1,350.00", 380.0, 730.0, 40.0),
            ],
        ];
        let conversion = converter("td-account").convert_fragments(&pages, None).unwrap();

        let cells: Vec<[String; 5]> = conversion.rows.iter().map(|r| r.row.cells()).collect();
        assert_eq!(
            cells,
            vec![
                ["Jan 05", "SEND E-TFR JOHN SMITH", "50.00", "", "450.00"].map(String::from),
                ["Jan 06", "PAYROLL", "", "900.00", "1350.00"].map(String::from),
            ]
        );
    }
}
