//! Fixed prompt templates for query synthesis and answer composition.
//!
//! The composition prompt's step list names the sentinel strings from
//! [`crate::sentinel`]; changing either side breaks detection.

/// Build the SQL synthesis prompt.
///
/// Role instructions, formatting rules, three worked examples, then the
/// live schema and the caller's question.
pub fn synthesis_prompt(question: &str, top_k: u32, table_info: &str) -> String {
    format!(
        r#"You are a PostgreSQL expert. Given an input question, create a syntactically correct PostgreSQL query to run.
Query for at most {top_k} results using LIMIT. Order results if helpful.
Query only the necessary columns. Wrap column names in double quotes (").
Use only columns listed in the table info. Check which table has which column.
If the question seems unrelated to budget, posts, or expenses, return "UNRELATED_QUERY_ATTEMPT".
Return only the SQL query or "UNRELATED_QUERY_ATTEMPT". No explanations.

Use this table information:
{table_info}

-- Examples --

Question: What is the basic pay for the Collector in Mumbai City?
SQL Query: SELECT "BasicPay" FROM budget_post_details WHERE "District" = 'Mumbai City' AND "Designation" = 'Collector';

Question: Show actual expenditure for Salary in Palghar for 2022-2023.
SQL Query: SELECT "ActualAmountExpenditure20222023" FROM unit_expenditure WHERE "District" = 'Palghar' AND "PrimaryAndSecondaryUnitsOfAccount" = '01- Salary';

Question: Total filled posts for temporary Class 4 in Thane?
SQL Query: SELECT SUM("FilledPosts") FROM post_expenses WHERE "District" = 'Thane' AND "Category" = 'Temporary' AND "Class" = '4';

-- End Examples --

Question: {question}
SQL Query:"#
    )
}

/// Build the answer composition prompt.
///
/// The numbered steps are checked by the model in priority order: errors
/// first, then empty results, then out-of-domain redirection, then actual
/// answers.
pub fn composition_prompt(question: &str, results_text: &str) -> String {
    format!(
        r#"You are a helpful assistant answering questions about budget and staffing data (budget post details, post status, post expenses, unit expenditure) based on information retrieved from the system.
The user asked the following question:
"{question}"

The system retrieved the following relevant information (or status message):
{results_text}

Follow these steps carefully to formulate your answer to the user, using simple and non-technical language:
1. Check if the 'results' indicate an error (e.g., contains "DATABASE_ERROR", "GENERAL_ERROR"). If yes, state politely that a technical problem occurred while accessing the required information.
2. Check if the 'results' indicate "NO_RECORDS_FOUND". If yes, state clearly that no information matching the specific criteria was found. Suggest checking spelling or trying slightly different terms if appropriate.
3. Check if the 'results' indicate "UNRELATED_QUERY_ATTEMPT" or "Could not generate query.". If yes, politely inform the user that you can only answer questions about the available budget, staffing, and expenditure details, and ask them to rephrase their question to focus on those topics.
4. Check if the 'results' contain actual data, but the original 'question' was very broad. If so, briefly describe the *kind* of information found and politely ask the user to be more specific about what they need.
5. If the 'results' contain data that directly answers the specific 'question', provide a concise answer in simple language, based *only* on the provided 'results'. Do not use jargon like 'query', 'columns', 'database'.
6. If none of the above seem to fit, state that you couldn't find a clear answer with the available information and suggest they rephrase the question.

Answer:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::{COULD_NOT_GENERATE_QUERY, NO_RECORDS_FOUND, UNRELATED_QUERY_ATTEMPT};

    #[test]
    fn synthesis_prompt_fills_placeholders() {
        let prompt = synthesis_prompt("What is the pay?", 5, "CREATE TABLE t (\"Pay\" integer)");
        assert!(prompt.contains("at most 5 results"));
        assert!(prompt.contains("CREATE TABLE t"));
        assert!(prompt.ends_with("Question: What is the pay?\nSQL Query:"));
    }

    #[test]
    fn synthesis_prompt_names_the_unrelated_sentinel() {
        let prompt = synthesis_prompt("q", 5, "schema");
        assert!(prompt.contains(UNRELATED_QUERY_ATTEMPT));
    }

    #[test]
    fn composition_prompt_fills_placeholders() {
        let prompt = composition_prompt("What is the pay?", "[{\"BasicPay\":50000}]");
        assert!(prompt.contains("\"What is the pay?\""));
        assert!(prompt.contains("[{\"BasicPay\":50000}]"));
    }

    #[test]
    fn composition_prompt_names_every_detected_sentinel() {
        let prompt = composition_prompt("q", "results");
        assert!(prompt.contains("DATABASE_ERROR"));
        assert!(prompt.contains("GENERAL_ERROR"));
        assert!(prompt.contains(NO_RECORDS_FOUND));
        assert!(prompt.contains(UNRELATED_QUERY_ATTEMPT));
        assert!(prompt.contains(COULD_NOT_GENERATE_QUERY));
    }
}
